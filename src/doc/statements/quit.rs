/*!
# `QUIT`

## Purpose
Leave the interpreter.

*/
