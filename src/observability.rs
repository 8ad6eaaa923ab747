use anyhow::Result;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` wins over `log_level` when set. Calling this twice returns an
/// error instead of replacing the first subscriber.
pub fn init_observability(service_version: &str, log_level: &str) -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    cfg_if::cfg_if! {
        if #[cfg(target_arch = "wasm32")] {
            // no clock on wasm32-unknown-unknown
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .without_time()
                        .with_ansi(false)
                        .with_writer(console::ConsoleWriter::default)
                        .with_filter(env_filter),
                )
                .try_init()?;
        } else {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_line_number(true)
                        .with_filter(env_filter),
                )
                .try_init()?;
        }
    }

    tracing::info!(
        service.name = "mealweek",
        service.version = service_version,
        log.level = log_level,
        "Observability initialized"
    );

    Ok(())
}

#[cfg(target_arch = "wasm32")]
mod console {
    use std::io;

    /// Buffers one formatted event and hands it to `console.log` on drop.
    #[derive(Default)]
    pub struct ConsoleWriter {
        buffer: Vec<u8>,
    }

    impl io::Write for ConsoleWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.buffer.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Drop for ConsoleWriter {
        fn drop(&mut self) {
            if self.buffer.is_empty() {
                return;
            }

            let line = String::from_utf8_lossy(&self.buffer);
            web_sys::console::log_1(&line.trim_end().into());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_is_an_error() {
        // the first call may lose against another test
        let _ = init_observability("0.0.0", "debug");

        assert!(init_observability("0.0.0", "debug").is_err());
    }
}
