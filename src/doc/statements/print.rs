/*!
# `PRINT <expression>`

## Purpose
Output one line to the terminal for the operator.

## Remarks
Numbers print without a trailing `.0`. Results of dividing by zero
print as `INF`, `-INF` or `NAN`.

## Example
```text
PRINT 2 + 3 * 4
14
```

*/
