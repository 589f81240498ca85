//! List rules command implementation.

use namingng_core::RuleKey;
use namingng_rules::all_rules;

/// Runs the list-rules command.
pub fn run() {
    println!("Available rules:\n");
    println!("{:<20} {:<32} Description", "Name", "Ids");
    println!("{}", "-".repeat(96));

    for rule in all_rules() {
        let ids = rule.rule_ids();
        for (i, id) in ids.iter().enumerate() {
            if i == 0 {
                println!("{:<20} {:<32} {}", rule.name(), id, rule.description());
            } else {
                println!("{:<20} {id}", "");
            }
        }
    }

    println!("\nPresets:");
    println!("  all     - naming-convention, include-guard (default)");
    println!("  naming  - naming-convention only");

    println!("\nPattern keys:");
    let keys: Vec<&str> = RuleKey::ALL.iter().map(|k| k.as_str()).collect();
    println!("  {}", keys.join(", "));
}
