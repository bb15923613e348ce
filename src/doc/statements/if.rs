/*!
# `IF <expression> <comparison> <expression> THEN <line number>`

## Purpose
Jump to a line when a comparison holds.

## Remarks
The comparison is one of `<`, `=` or `>`. When it doesn't hold, execution
continues with the next line. The same happens when the target is the
`IF` line itself.

## Example
```text
10 LET A = 1
20 PRINT A
30 LET A = A + 1
40 IF A < 4 THEN 20
RUN
1
2
3
```

*/
