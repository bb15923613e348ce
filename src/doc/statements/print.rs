/*!
# `PRINT <expression>`

## Purpose
Prints the value of an expression followed by a newline.

## Example
```text
PRINT 3 + 4 * 2
11
```

*/
