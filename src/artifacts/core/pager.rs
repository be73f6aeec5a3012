use derive_new::new;
use is_terminal::IsTerminal;
use minus::Pager;
use std::io::{self, Write};

pub const NO_PAGER_ENV: &str = "NO_PAGER";

/// `Write` adapter that pushes command output into the minus pager.
///
/// ```ignore
/// let pager = Pager::new();
/// let mut writer = PagerWriter::new(pager.clone());
/// writeln!(writer, "* 1a2b3c4 initial commit")?;
/// minus::page_all(pager)?;
/// ```
#[derive(new)]
pub struct PagerWriter {
    pager: Pager,
}

impl Write for PagerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let text = String::from_utf8_lossy(buf);
        self.pager.push_str(text).map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Paging only makes sense for an interactive stdout, and `NO_PAGER` opts out.
pub fn should_page(disabled: bool) -> bool {
    !disabled && std::env::var_os(NO_PAGER_ENV).is_none() && io::stdout().is_terminal()
}
