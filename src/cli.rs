mod args;

pub use args::{Cli, Command, CreateArgs, DeleteArgs, GetArgs, ImportArgs, ListArgs, UpdateArgs};
