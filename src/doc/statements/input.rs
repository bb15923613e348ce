/*!
# `INPUT <variable>`

## Purpose
Suspends execution and awaits a whole number from the terminal.

## Remarks
The prompt is ` ? `. The response may start with `+` or `-` and must
otherwise be decimal digits. Anything else prints `INVALID NUMBER` and
asks again.

## Example
```text
10 INPUT AGE
20 PRINT AGE + 1
```

*/
