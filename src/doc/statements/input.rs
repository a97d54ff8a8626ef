/*!
# `INPUT ["<prompt string>";]<variable>`

## Purpose
Suspends execution and awaits a response from the terminal.

## Remarks
The prompt is shown followed by a space. Without one, `? ` is shown.
A comma may stand in for the semicolon.
String variables receive the reply exactly as typed.
Numeric variables receive the reply as a number, or 0 if it isn't one.

## Example
```text
10 INPUT "WHAT IS YOUR NAME"; N$
20 PRINT N$
RUN
WHAT IS YOUR NAME ADA
ADA
```

*/
