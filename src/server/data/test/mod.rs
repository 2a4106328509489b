mod operation;
