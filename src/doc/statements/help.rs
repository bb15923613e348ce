/*!
# `HELP`

## Purpose
Print a summary of the statements and commands.

*/
