//! Your first look at structural rendering: opt a struct in with `reflect!`
//! and print it in both styles.
//!
//! Run with: `cargo run --example basic`

use reflected::{reflect, render, Style};

struct User {
    id: i64,
    name: String,
    active: bool,
    scores: Vec<f64>,
}

reflect!(User {
    id,
    name,
    active,
    scores
});

fn main() {
    let user = User {
        id: 123,
        name: "Alice".to_string(),
        active: true,
        scores: vec![9.5, 8.0],
    };

    println!("{}", render(&user, Style::Normal));
    // User(id: 123, name: "Alice", active: true, scores: [9.5, 8.0])

    println!("{}", render(&user, Style::Json));
    // {
    //   "active": true,
    //   "id": 123,
    //   "name": "Alice",
    //   "scores": [
    //     9.5,
    //     8.0
    //   ]
    // }
}
