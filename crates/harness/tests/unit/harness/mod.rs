pub mod backdoor;
