/*!
# `CLEAR`

## Purpose
Erase the program and all variables.

## Remarks
Direct mode only.

## Example
```text
CLEAR
```

*/
