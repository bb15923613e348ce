/*!
# Statements

`REM`, `GOTO`, `IF` and `END` are only allowed in a program.
`RUN`, `LIST`, `CLEAR`, `HELP` and `QUIT` are only allowed in direct mode.
`LET`, `PRINT` and `INPUT` are allowed in both.
*/

#[path = "statements/clear.rs"]
#[allow(non_snake_case)]
pub mod CLEAR;

#[path = "statements/end.rs"]
#[allow(non_snake_case)]
pub mod END;

#[path = "statements/goto.rs"]
#[allow(non_snake_case)]
pub mod GOTO;

#[path = "statements/help.rs"]
#[allow(non_snake_case)]
pub mod HELP;

#[path = "statements/if.rs"]
#[allow(non_snake_case)]
pub mod IF;

#[path = "statements/input.rs"]
#[allow(non_snake_case)]
pub mod INPUT;

#[path = "statements/let.rs"]
#[allow(non_snake_case)]
pub mod LET;

#[path = "statements/list.rs"]
#[allow(non_snake_case)]
pub mod LIST;

#[path = "statements/print.rs"]
#[allow(non_snake_case)]
pub mod PRINT;

#[path = "statements/quit.rs"]
#[allow(non_snake_case)]
pub mod QUIT;

#[path = "statements/rem.rs"]
#[allow(non_snake_case)]
pub mod REM;

#[path = "statements/run.rs"]
#[allow(non_snake_case)]
pub mod RUN;
