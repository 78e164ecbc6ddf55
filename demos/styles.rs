//! Ancestor chains, opaque fallbacks, and serializer options.
//!
//! Run with: `cargo run --example styles`

use reflected::{opaque, reflect, render_with_options, to_normal_string, RenderOptions, Style};
use std::fmt;

enum Tier {
    Free,
    Pro,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Tier::Free => "Free",
            Tier::Pro => "Pro",
        })
    }
}

opaque!(Tier: display);

struct Account {
    id: i64,
    tier: Tier,
}

struct Member {
    account: Account,
    nickname: String,
}

reflect!(Account { id, tier });
reflect!(Member: account { nickname });

fn main() {
    let member = Member {
        account: Account {
            id: 7,
            tier: Tier::Pro,
        },
        nickname: "zed".to_string(),
    };

    // Own fields first, then the ancestor's.
    println!("{}", to_normal_string(&member));
    // Member(nickname: "zed", id: 7, tier: Pro)

    // Wider indent, keys left in enumeration order.
    let options = RenderOptions::new().with_indent(4).with_sorted_keys(false);
    println!("{}", render_with_options(&member, Style::Json, options));
    // {
    //     "nickname": "zed",
    //     "id": 7,
    //     "tier": "Pro"
    // }
}
