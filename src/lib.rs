pub mod alphabet;
pub mod wordlist;
