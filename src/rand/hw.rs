//! Per-draw entropy reading: a free-running counter where userspace can read
//! one, the wall clock elsewhere.

#[cfg(target_arch = "x86_64")]
pub const SOURCE: &str = "rdtsc";

#[cfg(target_arch = "aarch64")]
pub const SOURCE: &str = "cycle counter";

#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
pub const SOURCE: &str = "system clock";

#[inline(always)]
pub fn read() -> u64 {
    #[cfg(target_arch = "x86_64")]
    {
        // Safety: rdtsc is unprivileged on every x86_64 target we build for.
        unsafe { core::arch::x86_64::_rdtsc() }
    }

    #[cfg(target_arch = "aarch64")]
    {
        let ticks: u64;
        // Safety: cntvct_el0 is readable from EL0.
        unsafe { core::arch::asm!("mrs {}, cntvct_el0", out(reg) ticks) }
        ticks
    }

    #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
    {
        use std::time::{SystemTime, UNIX_EPOCH};

        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| d.as_nanos() as u64)
    }
}
