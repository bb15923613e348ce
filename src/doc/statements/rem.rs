/*!
# `REM <anything>`

## Purpose
A comment. The rest of the line is ignored.

## Example
```text
10 REM COUNT TO TEN
```

*/
