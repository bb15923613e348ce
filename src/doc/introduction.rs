/*!
# Introductory Tutorial

Start the `basic` executable from a terminal. There is no banner and no
prompt; the interpreter is waiting for a line. Type CTRL-D to exit, or
enter `QUIT`.

A line without a number is executed immediately. This is called direct
mode and works for `LET`, `PRINT` and `INPUT`.

<pre><code>&nbsp;> LET A = 6
&nbsp;> PRINT A * 7
&nbsp;  42
</code></pre>

A line that begins with a number is stored in the program instead.
Lines are kept in line number order no matter what order you type them in.

<pre><code>&nbsp;> 20 PRINT A + 1
&nbsp;> 10 LET A = 9
&nbsp;> LIST
&nbsp;  10 LET A = 9
&nbsp;  20 PRINT A + 1
&nbsp;> RUN
&nbsp;  10
</code></pre>

Typing a line number that already exists replaces that line. Typing a line
number alone deletes it. Keywords may be typed in any case; `LIST` shows
them in upper case.

All numbers are whole numbers. Division rounds toward zero so
`PRINT 7 / 2` prints `3`. A variable must be given a value with `LET` or
`INPUT` before it is used, otherwise the line stops with
`VARIABLE NOT DEFINED`.

Here's a program which counts down using `IF` to loop.

<pre><code>&nbsp;> CLEAR
&nbsp;> 10 INPUT N
&nbsp;> 20 PRINT N
&nbsp;> 30 LET N = N - 1
&nbsp;> 40 IF N > 0 THEN 20
&nbsp;> 50 END
&nbsp;> RUN
&nbsp;   ? 3
&nbsp;  3
&nbsp;  2
&nbsp;  1
</code></pre>

If a response to `INPUT` isn't a whole number, `INVALID NUMBER` is printed
and the question is asked again.

## Errors

Errors print the kind of error, the line number when a program was running,
and the columns of the line body where it was found.

<pre><code>&nbsp;> 10 PRINT 1 / (2 - 2)
&nbsp;> RUN
&nbsp;  DIVISION BY ZERO IN 10 (8..9)
</code></pre>

| Error | Cause |
|-|-|
| `SYNTAX ERROR` | The line could not be parsed. |
| `VARIABLE NOT DEFINED` | A variable was read before it was given a value. |
| `DIVISION BY ZERO` | The right side of `/` was zero. |
| `LINE NUMBER ERROR` | `GOTO` or `IF` named a line that doesn't exist. |
| `OVERFLOW` | A result didn't fit in a 32-bit integer. |

*/
