/*!
# `GOTO <line number>`

## Purpose
Immediately and unconditionally move execution to the specified line number.

## Remarks
If `<line number>` isn't in the program an `UNDEFINED LINE NUMBER` error
stops the run at the line holding the `GOTO`.

## Example
```text
10 GOTO 30
20 PRINT "THIS WILL NOT PRINT"
30 PRINT "THIS WILL PRINT"
```

*/
