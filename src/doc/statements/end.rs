/*!
# `END`

## Purpose
Stop the program.

## Remarks
Running past the last line also stops the program, so `END` is only
needed to stop before the last line.

## Example
```text
10 PRINT 1
20 END
30 PRINT 2
RUN
1
```

*/
