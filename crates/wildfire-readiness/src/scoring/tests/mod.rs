mod adjust;
mod common;
mod explain;
