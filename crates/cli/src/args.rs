use argh::FromArgs;
use log::warn;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::de::DeserializeOwned;
use validator::Validate;

use base::options::{SampleOptions, SelectOptions, SortOptions};
use base::order::Polarity;
use base::scalar::F64;

#[derive(Debug, Eq, PartialEq)]
pub struct ArgumentParseError;

fn parse_options<T: DeserializeOwned + Validate>(toml_str: &str) -> Result<T, ArgumentParseError> {
    let options: T = match toml::from_str(toml_str) {
        Ok(options) => options,
        Err(err) => {
            warn!("failed to parse the TOML options: {err}");
            return Err(ArgumentParseError);
        }
    };
    if let Err(err) = options.validate() {
        warn!("invalid options: {err}");
        return Err(ArgumentParseError);
    }
    Ok(options)
}

fn want_from_str(s: &str) -> Result<Polarity, ArgumentParseError> {
    match s.trim() {
        "max" => Ok(Polarity::Max),
        "min" => Ok(Polarity::Min),
        _ => Err(ArgumentParseError),
    }
}

pub fn parse_values(s: &str) -> Result<Vec<F64>, ArgumentParseError> {
    s.split(',')
        .map(str::trim)
        .filter(|x| !x.is_empty())
        .map(|x| {
            x.parse::<F64>().map_err(|err| {
                warn!("failed to parse value {x:?}: {err}");
                ArgumentParseError
            })
        })
        .collect()
}

#[derive(FromArgs, Debug, PartialEq)]
#[argh(subcommand)]
pub enum SubCommandEnum {
    Sort(SortArguments),
    Select(SelectArguments),
    Sample(SampleArguments),
}

/// Where the values come from.
#[derive(Debug, Clone, PartialEq)]
pub struct InputArguments {
    pub values: Option<String>,
    pub random: Option<usize>,
    pub seed: u64,
}

impl InputArguments {
    pub fn get_values(&self) -> Result<Vec<F64>, ArgumentParseError> {
        match (&self.values, self.random) {
            (Some(values), None) => parse_values(values),
            (None, Some(n)) => {
                let mut rng = StdRng::seed_from_u64(self.seed);
                Ok((0..n).map(|_| F64(rng.gen_range(0.0..1000.0))).collect())
            }
            _ => {
                warn!("exactly one of `--values` and `--random` is required");
                Err(ArgumentParseError)
            }
        }
    }
}

#[derive(FromArgs, Debug, PartialEq)]
/// sort values in place
#[argh(subcommand, name = "sort")]
pub struct SortArguments {
    /// comma separated values
    #[argh(option)]
    pub values: Option<String>,

    /// draw this many values from a seeded generator instead
    #[argh(option)]
    pub random: Option<usize>,

    /// seed for `--random`
    #[argh(option, default = "0")]
    pub seed: u64,

    /// sort options in TOML string, e.g. `method = "shell"`
    #[argh(positional, default = "String::new()")]
    pub options: String,
}

impl SortArguments {
    pub fn get_input(&self) -> InputArguments {
        InputArguments {
            values: self.values.clone(),
            random: self.random,
            seed: self.seed,
        }
    }
    pub fn get_sort_options(&self) -> Result<SortOptions, ArgumentParseError> {
        parse_options(&self.options)
    }
}

#[derive(FromArgs, Debug, PartialEq)]
/// keep the k most extreme values
#[argh(subcommand, name = "select")]
pub struct SelectArguments {
    /// comma separated values
    #[argh(option)]
    pub values: Option<String>,

    /// draw this many values from a seeded generator instead
    #[argh(option)]
    pub random: Option<usize>,

    /// seed for `--random`
    #[argh(option, default = "0")]
    pub seed: u64,

    /// number of values to keep
    #[argh(option, default = "10")]
    pub k: u32,

    /// which extreme to keep: [`max`, `min`]
    #[argh(option, default = "String::from(\"max\")")]
    pub want: String,
}

impl SelectArguments {
    pub fn get_input(&self) -> InputArguments {
        InputArguments {
            values: self.values.clone(),
            random: self.random,
            seed: self.seed,
        }
    }
    pub fn get_select_options(&self) -> Result<SelectOptions, ArgumentParseError> {
        let options = SelectOptions {
            k: self.k,
            want: want_from_str(&self.want)?,
        };
        if let Err(err) = options.validate() {
            warn!("invalid options: {err}");
            return Err(ArgumentParseError);
        }
        Ok(options)
    }
}

#[derive(FromArgs, Debug, PartialEq)]
/// sample indices, treating values as weights
#[argh(subcommand, name = "sample")]
pub struct SampleArguments {
    /// comma separated weights
    #[argh(option)]
    pub values: Option<String>,

    /// draw this many weights from a seeded generator instead
    #[argh(option)]
    pub random: Option<usize>,

    /// seed for `--random`
    #[argh(option, default = "0")]
    pub seed: u64,

    /// remove picks one by one instead of picking them in one pass
    #[argh(switch)]
    pub pop: bool,

    /// ignore the weights
    #[argh(switch)]
    pub uniform: bool,

    /// sample options in TOML string, e.g. `amount = 3`
    #[argh(positional, default = "String::new()")]
    pub options: String,
}

impl SampleArguments {
    pub fn get_input(&self) -> InputArguments {
        InputArguments {
            values: self.values.clone(),
            random: self.random,
            seed: self.seed,
        }
    }
    pub fn get_sample_options(&self) -> Result<SampleOptions, ArgumentParseError> {
        parse_options(&self.options)
    }
}

#[derive(FromArgs, Debug)]
/// `orderstat` CLI
pub struct Arguments {
    #[argh(subcommand)]
    pub cmd: SubCommandEnum,

    /// verbose
    #[argh(switch, short = 'v')]
    pub verbose: bool,
}

#[cfg(test)]
mod test {
    use super::*;
    use base::order::{Order, SortMethod};

    #[test]
    fn values() {
        assert_eq!(
            parse_values("5, 3,8 ,1,"),
            Ok([5.0, 3.0, 8.0, 1.0].map(F64).to_vec())
        );
        assert_eq!(parse_values("1,x"), Err(ArgumentParseError));
        let input = InputArguments {
            values: None,
            random: Some(16),
            seed: 7,
        };
        let a = input.get_values().unwrap();
        assert_eq!(a.len(), 16);
        assert_eq!(a, input.get_values().unwrap());
        let neither = InputArguments {
            values: None,
            random: None,
            seed: 0,
        };
        assert!(neither.get_values().is_err());
    }

    #[test]
    fn sort_command() {
        let args = Arguments::from_args(
            &["orderstat"],
            &["sort", "--values", "2,1", "method = \"bubble\"\norder = \"desc\""],
        )
        .unwrap();
        let SubCommandEnum::Sort(sort) = args.cmd else {
            panic!("expected sort");
        };
        let options = sort.get_sort_options().unwrap();
        assert_eq!(options.method, SortMethod::Bubble);
        assert_eq!(options.order, Order::Desc);
        assert_eq!(sort.get_input().get_values().unwrap().len(), 2);
    }

    #[test]
    fn select_and_sample_commands() {
        let args = Arguments::from_args(&["orderstat"], &["-v", "select", "--random", "5", "--k", "0"])
            .unwrap();
        assert!(args.verbose);
        let SubCommandEnum::Select(select) = args.cmd else {
            panic!("expected select");
        };
        assert!(select.get_select_options().is_err());
        let args =
            Arguments::from_args(&["orderstat"], &["sample", "--values", "1,3", "--pop", "amount = 2"])
                .unwrap();
        let SubCommandEnum::Sample(sample) = args.cmd else {
            panic!("expected sample");
        };
        assert!(sample.pop);
        assert_eq!(sample.get_sample_options().unwrap().amount, 2);
    }
}
