//! Stub snippets shared by the core unit tests.

use std::cell::RefCell;

use anyhow::{Result, anyhow, bail};

use super::snippet::{Snippet, SnippetDescriptor};

thread_local! {
    static CALLS: RefCell<Vec<(String, Vec<String>)>> = const { RefCell::new(Vec::new()) };
}

/// Every `(name, args)` pair executed on this test thread so far.
pub fn calls() -> Vec<(String, Vec<String>)> {
    CALLS.with(|c| c.borrow().clone())
}

#[derive(Clone, Copy)]
enum Behavior {
    Record,
    Fail,
    Panic,
}

pub struct Stub {
    name: &'static str,
    description: &'static str,
    behavior: Behavior,
}

impl Snippet for Stub {
    fn name(&self) -> &str {
        self.name
    }

    fn description(&self) -> &str {
        self.description
    }

    fn execute(&self, args: &[String]) -> Result<()> {
        match self.behavior {
            Behavior::Record => {
                CALLS.with(|c| c.borrow_mut().push((self.name.to_string(), args.to_vec())));
                Ok(())
            }
            Behavior::Fail => bail!("division by zero"),
            Behavior::Panic => panic!("index out of range"),
        }
    }
}

const fn stub(name: &'static str, description: &'static str, behavior: Behavior) -> Stub {
    Stub {
        name,
        description,
        behavior,
    }
}

fn hello() -> Result<Box<dyn Snippet>> {
    Ok(Box::new(stub("hello", "Prints Hello World", Behavior::Record)))
}

fn shouting_hello() -> Result<Box<dyn Snippet>> {
    Ok(Box::new(stub("HELLO", "", Behavior::Record)))
}

fn math() -> Result<Box<dyn Snippet>> {
    Ok(Box::new(stub("math", "adds two numbers", Behavior::Record)))
}

fn qualified() -> Result<Box<dyn Snippet>> {
    Ok(Box::new(stub("week1/hello", "named like a key", Behavior::Record)))
}

fn failing_ctor() -> Result<Box<dyn Snippet>> {
    Err(anyhow!("broken on purpose"))
}

fn panicking_ctor() -> Result<Box<dyn Snippet>> {
    panic!("constructor exploded")
}

fn nameless() -> Result<Box<dyn Snippet>> {
    Ok(Box::new(stub("  ", "", Behavior::Record)))
}

fn faulty() -> Result<Box<dyn Snippet>> {
    Ok(Box::new(stub("faulty", "returns an error", Behavior::Fail)))
}

fn panicky() -> Result<Box<dyn Snippet>> {
    Ok(Box::new(stub("panicky", "panics", Behavior::Panic)))
}

fn winforms() -> Result<Box<dyn Snippet>> {
    Ok(Box::new(stub("winforms-test", "needs Windows", Behavior::Record)))
}

pub const HELLO_WEEK1: SnippetDescriptor = SnippetDescriptor::new("week1", "HelloWorld", hello);
pub const HELLO_WEEK2: SnippetDescriptor = SnippetDescriptor::new("Week2", "HelloWorld", hello);
pub const HELLO_WEEK2_UPPER: SnippetDescriptor =
    SnippetDescriptor::new("week2", "ShoutingHello", shouting_hello);
pub const MATH: SnippetDescriptor = SnippetDescriptor::new("", "MathSnippet", math);
pub const QUALIFIED: SnippetDescriptor = SnippetDescriptor::new("", "Qualified", qualified);
pub const BROKEN: SnippetDescriptor =
    SnippetDescriptor::new("snippet_runner::first_week", "broken::BrokenSnippet", failing_ctor);
pub const EXPLODING: SnippetDescriptor = SnippetDescriptor::new("week3", "Exploding", panicking_ctor);
pub const NAMELESS: SnippetDescriptor = SnippetDescriptor::new("week3", "Nameless", nameless);
pub const FAULTY: SnippetDescriptor = SnippetDescriptor::new("apps", "Faulty", faulty);
pub const PANICKY: SnippetDescriptor = SnippetDescriptor::new("apps", "Panicky", panicky);
pub const WINDOWS_ONLY: SnippetDescriptor =
    SnippetDescriptor::new("WinForms", "WinFormsSnippet", winforms).with_platform("Windows");
pub const BROKEN_HELLO_WEEK2: SnippetDescriptor =
    SnippetDescriptor::new("week2", "hello", failing_ctor);
pub const WINFORMS_ANYWHERE: SnippetDescriptor =
    SnippetDescriptor::new("winforms", "WinFormsSnippet", winforms);
