/*!
# `RUN`

## Purpose
Clear variables and start the program at its first line.

## Remarks
Every line is checked before anything runs. If one doesn't parse, the
error names that line and the program never starts.
Stop a running program with CTRL-C.

## Example
```text
10 PRINT "Hello World"
RUN
Hello World
```

*/
