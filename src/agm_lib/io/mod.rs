/*!
Input and output for a terminal front end.

- [cli] builds the command line, and configuration from its arguments.
- [store] loads and saves a base of beliefs as JSON.
- [render] writes revision steps to a terminal.
*/

pub mod cli;
pub mod render;
pub mod store;
