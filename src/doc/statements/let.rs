/*!
# `LET <variable> = <expression>`

## Purpose
Assigns the value of an expression to a variable.

## Remarks
The variable is created if it doesn't exist. The word `LET` is required.

## Example
```text
LET A = 2 * (3 + 4)
```

*/
