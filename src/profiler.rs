use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Time spent in a profiled section since the last report.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SectionTiming {
    pub total: Duration,
    pub calls: u32,
}

impl SectionTiming {
    pub fn mean(&self) -> Duration {
        if self.calls == 0 {
            Duration::ZERO
        } else {
            self.total / self.calls
        }
    }
}

/// Scoped profiler accumulating time per named frame section.
#[derive(Debug, Default)]
pub struct Profiler {
    pub sections: HashMap<&'static str, SectionTiming>,
}

impl Profiler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, name: &'static str, elapsed: Duration) {
        let timing = self.sections.entry(name).or_default();
        timing.total += elapsed;
        timing.calls += 1;
    }

    /// Sections ordered by total time, slowest first.
    pub fn report_sorted(&self) -> Vec<(&'static str, SectionTiming)> {
        let mut v: Vec<_> = self.sections.iter().map(|(n, t)| (*n, *t)).collect();
        v.sort_by(|a, b| b.1.total.cmp(&a.1.total));
        v
    }

    pub fn clear(&mut self) {
        self.sections.clear();
    }

    pub fn print_and_clear(&mut self) {
        for (name, timing) in self.report_sorted() {
            tracing::info!(
                section = name,
                calls = timing.calls,
                total = ?timing.total,
                mean = ?timing.mean(),
                "profile"
            );
        }
        self.clear();
    }
}

#[cfg_attr(not(feature = "profiling"), allow(dead_code))]
pub struct ProfilerGuard {
    name: &'static str,
    start: Instant,
}

/// Start a profiling section. The returned guard records into the global
/// profiler when dropped.
pub fn start(name: &'static str) -> ProfilerGuard {
    ProfilerGuard { name, start: Instant::now() }
}

#[cfg(feature = "profiling")]
impl Drop for ProfilerGuard {
    fn drop(&mut self) {
        crate::PROFILER.lock().record(self.name, self.start.elapsed());
    }
}

/// Profile the enclosing scope when the `profiling` feature is enabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _guard = $crate::profiler::start($name);
    };
}
