/*!
# `LIST`

## Purpose
Show the BASIC program currently in memory.

## Remarks
Lines are shown in ascending order, exactly as they were typed.
`LIST` is a command; it can't be used inside a program.

## Example
```text
20 PRINT "WORLD"
10 PRINT "HELLO"
LIST
10 PRINT "HELLO"
20 PRINT "WORLD"
```

*/
