#[cfg(target_arch = "x86_64")]
mod rdseed;
#[cfg(target_arch = "x86_64")]
pub use rdseed::RdseedSeeder;

mod unix;
pub use unix::UnixSeeder;
