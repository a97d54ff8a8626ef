/*!
# `CLS`

## Purpose
Clear the terminal.

## Remarks
Works as a command or inside a program.

## Example
```text
10 CLS
20 PRINT "TOP OF THE SCREEN"
```

*/
