/*!
# `RUN`

## Purpose
Run the program from its first line.

## Remarks
Variables are not cleared first.

## Example
```text
RUN
```

*/
