/*!
# Introductory Tutorial

Start the executable from a terminal. Type CTRL-D to exit.
<pre><code>&nbsp;  LINE BASIC
&nbsp;  READY.
&nbsp;> █
</code></pre>

Stop a running program with CTRL-C.

When you see `READY.` the interpreter accepts a line. A line that starts
with a number is stored in the program under that number. Anything else
is a command. For this tutorial, lines that you type are marked with
a "`>`".

<pre><code>&nbsp;> 10 PRINT "Hello World"
&nbsp;> LIST
&nbsp;  10 PRINT "Hello World"
&nbsp;  READY.
&nbsp;> RUN
&nbsp;  Hello World
&nbsp;  READY.
</code></pre>

Typing a stored line number by itself deletes that line. Typing a line
number followed by TAB recalls the line for editing.

<pre><code>&nbsp;> 10<i>{TAB}</i>
&nbsp;> 10 PRINT "Hello World"
</code></pre>

The commands are `RUN`, `LIST`, `NEW` and `CLS`. Statements can only be
used inside a program.

<pre><code>&nbsp;> PAINT "Hello World"
&nbsp;  <b>?SYNTAX ERROR</b>
</code></pre>

Programs are held in memory. To keep one, write it to a text file with one
numbered line per line of text and give the file name when starting the
interpreter. Add `--run` to start it right away.

<pre><code>&nbsp;$ basic hello.bas --run
&nbsp;  LINE BASIC
&nbsp;  Hello World
&nbsp;  READY.
</code></pre>

Variables need no declaring. Numeric variables start at 0 and string
variables, whose names end in `$`, start empty. Names are not case sensitive.

<pre><code>&nbsp;> 10 INPUT "NAME"; N$
&nbsp;> 20 PRINT N$
&nbsp;> 30 GOTO 10
&nbsp;> RUN
&nbsp;  NAME Ada
&nbsp;  Ada
&nbsp;  NAME <i>{CTRL-C}</i>
&nbsp;  <b>?BREAK IN 10</b>
&nbsp;  READY.
</code></pre>

*/
