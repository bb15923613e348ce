/*!
# `LIST`

## Purpose
Print the program in line number order.

## Example
```text
LIST
```

*/
