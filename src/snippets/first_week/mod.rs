mod broken;
mod hello;

snippet_runner::register_snippet!(hello::HelloWorld);
snippet_runner::register_snippet!(broken::BrokenSnippet => broken::BrokenSnippet::try_new);
