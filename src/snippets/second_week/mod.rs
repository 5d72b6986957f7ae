mod hello;
mod print_decimal;
mod print_message;

snippet_runner::register_snippet!(hello::HelloWorld);
snippet_runner::register_snippet!(print_decimal::PrintDecimal);
snippet_runner::register_snippet!(print_message::PrintMessage);
