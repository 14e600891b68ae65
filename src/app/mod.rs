// Entry points that exist so scripts can already call them.

pub mod stubs;
