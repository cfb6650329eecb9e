//! Signup Form Example
//!
//! Validates a handful of signup submissions against one shared schema and
//! prints where each rejected submission went wrong.
//!
//! Run with: cargo run --example signup_form

use schema_rail::prelude::*;

fn signup_schema() -> Result<Validator, schema_rail::PatternError> {
    let username = string()
        .minlen(3)
        .maxlen(20)
        .try_pattern(r"^[a-z0-9_]+$")?
        .func(|v: &Value| match v.as_str() {
            Some("admin" | "root") => HookOutcome::fail_with(Code::Func),
            _ => HookOutcome::pass(),
        });

    let schema: Validator = map()
        .required(["username", "email", "password"])
        .field("username", username)
        .field("email", string().try_pattern(r".+@.+\..+")?)
        .field("phone", string().try_pattern(r"^\d{3}-\d{3}-\d{4}$")?)
        .field("password", string().minlen(8))
        .field("age", number().min(13.0).max(130.0))
        .field("newsletter", boolean())
        .field("interests", array_of(string()).maxlen(5).unique())
        .field("plan", any_of(["free", "pro", "team"]))
        .into();

    Ok(schema)
}

fn submissions() -> Vec<(&'static str, Value)> {
    vec![
        (
            "complete",
            table! {
                "username" => "ada_l",
                "email" => "ada@example.org",
                "password" => "correct horse",
                "age" => 36,
                "newsletter" => true,
                "interests" => array!["math", "engines"],
                "plan" => "pro",
            },
        ),
        (
            "reserved name",
            table! {
                "username" => "admin",
                "email" => "root@example.org",
                "password" => "hunter2hunter2",
            },
        ),
        (
            "bad email",
            table! {
                "username" => "grace",
                "email" => "bad-email",
                "password" => "cobol-forever",
                "phone" => "555-010-0000",
            },
        ),
        (
            "duplicate interest",
            table! {
                "username" => "linus",
                "email" => "linus@example.org",
                "password" => "penguins!",
                "interests" => array!["kernels", "git", "kernels"],
            },
        ),
        (
            "unknown plan",
            table! {
                "username" => "barbara",
                "email" => "bl@example.org",
                "password" => "abstraction",
                "plan" => "enterprise",
            },
        ),
        ("missing password", table! { "username" => "ken", "email" => "ken@example.org" }),
    ]
}

fn main() {
    let schema = match signup_schema() {
        Ok(schema) => schema,
        Err(err) => {
            eprintln!("{err}");
            return;
        }
    };

    for (label, submission) in submissions() {
        match schema.validate(&submission) {
            Ok(_) => println!("[{label}] accepted"),
            Err(failure) => {
                println!("[{label}] rejected: {}", failure.error_chain());
                if !failure.branches().is_empty() {
                    println!("{}", failure.fmt().pretty());
                }
            }
        }
    }
}
