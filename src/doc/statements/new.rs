/*!
# `NEW`

## Purpose
Erase the program and variables in memory.

## Remarks
Refused while a program is running.

## Example
```text
NEW
LIST
```

*/
