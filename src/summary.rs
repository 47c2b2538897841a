use crate::args::Args;
use std::fmt::Display;
use std::io::{self, Write};

impl Args {
    /// Name/value pairs in the order they appear in the summary.
    fn summary_fields(&self) -> Vec<(&'static str, String)> {
        let flag = |b: bool| u8::from(b).to_string();
        let real = |x: f64| format!("{x:.6}");
        let show = |v: &dyn Display| v.to_string();

        vec![
            ("ncrit", show(&self.ncrit())),
            ("cutoff", real(self.cutoff())),
            ("distribution", show(&self.distribution())),
            ("dual", flag(self.dual())),
            ("graft", flag(self.graft())),
            ("granularity", show(&self.granularity())),
            ("images", show(&self.images())),
            ("IneJ", flag(self.ine_j())),
            ("mutual", flag(self.mutual())),
            ("getMatrix", flag(self.get_matrix())),
            ("numBodies", show(&self.num_bodies())),
            ("useRopt", flag(self.use_ropt())),
            ("P", show(&self.expansion_order())),
            ("partitioning", show(&self.partitioning())),
            ("repeat", show(&self.repeat())),
            ("nspawn", show(&self.nspawn())),
            ("theta", real(self.theta())),
            ("threads", show(&self.threads())),
            ("verbose", flag(self.verbose())),
            ("write", flag(self.write_output())),
            ("useRmax", flag(self.use_rmax())),
        ]
    }

    /// Render every field as `name : value`, names left-justified to `width`.
    ///
    /// Rendered regardless of `verbose`; see [`Args::print_summary`] for the gated version.
    pub fn summary(&self, width: usize) -> String {
        self.summary_fields()
            .into_iter()
            .map(|(name, value)| format!("{name:<width$} : {value}\n"))
            .collect()
    }

    /// Write the summary to `out` when `--verbose` was given, nothing otherwise.
    pub fn write_summary<W: Write>(&self, out: &mut W, width: usize) -> io::Result<()> {
        if self.verbose() {
            out.write_all(self.summary(width).as_bytes())?;
        }
        Ok(())
    }

    /// Print the summary to stdout when `--verbose` was given.
    pub fn print_summary(&self, width: usize) -> io::Result<()> {
        self.write_summary(&mut io::stdout().lock(), width)
    }
}
