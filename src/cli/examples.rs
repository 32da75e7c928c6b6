use crate::ai::prompt::EXAMPLES;

pub fn run() {
    for (i, example) in EXAMPLES.iter().enumerate() {
        println!("{}. {}", i + 1, example);
    }
}
