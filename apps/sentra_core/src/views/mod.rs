pub mod sentra_health;
