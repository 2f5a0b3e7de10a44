use crate::config;
use crate::error::WifiError;
use crate::wifi::Adapter;
use color_eyre::eyre::{Result, eyre};
use std::io::{BufRead, Write};

pub fn print_adapters<W: Write>(adapters: &[Adapter], out: &mut W) -> Result<()> {
    writeln!(out, "Adapters:")?;
    for (index, adapter) in adapters.iter().enumerate() {
        writeln!(out, "{index}\t{}", adapter.name)?;
    }
    Ok(())
}

/// Pick the adapter to scan on.
///
/// A single adapter is chosen automatically; otherwise `preset` is used or the
/// user is prompted until a valid index is entered.
pub fn select_adapter<R: BufRead, W: Write>(
    adapters: &[Adapter],
    preset: Option<usize>,
    input: &mut R,
    out: &mut W,
) -> Result<usize> {
    if adapters.is_empty() {
        return Err(WifiError::NoAdapter.into());
    }

    if let Some(index) = preset {
        if index < adapters.len() {
            return Ok(index);
        }
        return Err(eyre!(
            "Adapter index {index} out of range ({} adapters found)",
            adapters.len()
        ));
    }

    if adapters.len() == 1 {
        writeln!(out, "{}", config::SINGLE_ADAPTER_NOTICE)?;
        return Ok(0);
    }

    let mut line = String::new();
    loop {
        write!(out, "{}", config::ADAPTER_PROMPT)?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(eyre!("No adapter selected"));
        }
        match line.trim().parse::<usize>() {
            Ok(index) if index < adapters.len() => return Ok(index),
            _ => continue,
        }
    }
}
