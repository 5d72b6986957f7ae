//! Built-in snippets. Each one registers itself with `register_snippet!`;
//! the registering module's path becomes its group.

mod applications;
mod first_week;
mod mac_only;
mod math;
mod second_week;
mod windows_only;
