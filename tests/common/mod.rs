use clap::Parser;
use pedigree::{InheritanceMode, Pedigree};

/// Surviving modes of inheritance of `pedigree`, in a stable order.
pub fn candidates(pedigree: &Pedigree) -> Vec<InheritanceMode> {
    pedigree.find_mode_of_inheritance()
        .expect("Inference should succeed on a valid pedigree")
        .iter()
        .collect()
}

/// Build an `infer` command line, one argument at a time.
#[derive(Debug, Default)]
pub struct InferRunnerBuilder {
    individuals: Vec<String>,
    links      : Vec<String>,
    verbosity  : u8,
}

#[allow(dead_code)]
impl InferRunnerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn individual(mut self, individual: &str) -> Self {
        self.individuals.push(individual.to_string());
        self
    }

    pub fn link(mut self, child: &str, parent: &str) -> Self {
        self.links.push(format!("{child}:{parent}"));
        self
    }

    pub fn verbose(mut self) -> Self {
        self.verbosity += 1;
        self
    }

    fn args(&self) -> Vec<String> {
        let mut args = vec![String::from("pedigree-profiler"), String::from("infer")];
        args.extend((0..self.verbosity).map(|_| String::from("-v")));
        for individual in &self.individuals {
            args.extend([String::from("--individual"), individual.clone()]);
        }
        for link in &self.links {
            args.extend([String::from("--link"), link.clone()]);
        }
        args
    }

    pub fn build(&self) -> Result<parser::Cli, clap::Error> {
        parser::Cli::try_parse_from(self.args())
    }
}
