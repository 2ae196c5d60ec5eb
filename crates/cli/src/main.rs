use base::scalar::F64;
use log::{debug, error, info};
use std::convert::Infallible;
use std::process::ExitCode;
use std::time::Instant;

use crate::args::{
    ArgumentParseError, Arguments, SampleArguments, SelectArguments, SortArguments, SubCommandEnum,
};

mod args;

fn join(values: impl IntoIterator<Item = impl ToString>) -> String {
    values
        .into_iter()
        .map(|x| x.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn run_sort(args: SortArguments) -> Result<(), ArgumentParseError> {
    let options = args.get_sort_options()?;
    let mut values = args.get_input().get_values()?;
    let start = Instant::now();
    sorting::sort_with_options(&mut values, |&x| x, &options);
    info!(
        "sorted {} values with {:?} in {:?}",
        values.len(),
        options.method,
        start.elapsed()
    );
    if !sorting::is_sorted_by_key(&values, |&x| x, options.order) {
        error!("output is not sorted");
    }
    println!("{}", join(values));
    Ok(())
}

fn run_select(args: SelectArguments) -> Result<(), ArgumentParseError> {
    let options = args.get_select_options()?;
    let values = args.get_input().get_values()?;
    let start = Instant::now();
    let picked = match select::select_extreme(options.k as usize, values, |&x| x, options.want) {
        Ok(picked) => picked,
        Err(err) => {
            error!("failed to select: {err}");
            return Err(ArgumentParseError);
        }
    };
    info!("selected {} values in {:?}", picked.len(), start.elapsed());
    println!("{}", join(picked));
    Ok(())
}

fn run_sample(args: SampleArguments) -> Result<(), ArgumentParseError> {
    let options = args.get_sample_options()?;
    let weights = args.get_input().get_values()?;
    let mut rng = sample::rng_from_options(&options);
    let amount = options.amount as usize;
    let candidates = weights.into_iter().enumerate().collect::<Vec<_>>();
    let weight = |&(_, F64(w)): &(usize, F64)| Ok::<f64, Infallible>(w);
    let picked = if args.pop {
        let mut candidates = candidates;
        let mut picked = Vec::with_capacity(amount);
        for _ in 0..amount {
            let popped = if args.uniform {
                sample::random_pop(&mut candidates, options.keep_order, &mut rng)
            } else {
                sample::weighted_pop(&mut candidates, weight, options.keep_order, &mut rng)
            };
            match popped {
                Ok(x) => picked.push(x),
                Err(err) => {
                    debug!("stopped after {} picks: {err}", picked.len());
                    break;
                }
            }
        }
        Ok(picked)
    } else if args.uniform {
        sample::uniform_pick(amount, candidates, &mut rng)
    } else {
        sample::weighted_pick(amount, candidates, weight, &mut rng)
    };
    match picked {
        Ok(picked) => {
            println!("{}", join(picked.into_iter().map(|(index, _)| index)));
            Ok(())
        }
        Err(err) => {
            error!("failed to sample: {err}");
            Err(ArgumentParseError)
        }
    }
}

fn main() -> ExitCode {
    let args: Arguments = argh::from_env();
    let mut log_builder = env_logger::builder();
    if args.verbose {
        log_builder.filter_level(log::LevelFilter::Debug);
    } else {
        log_builder.filter_level(log::LevelFilter::Info);
    }
    log_builder.init();
    debug!("arguments: {args:#?}");

    let result = match args.cmd {
        SubCommandEnum::Sort(x) => run_sort(x),
        SubCommandEnum::Select(x) => run_select(x),
        SubCommandEnum::Sample(x) => run_sample(x),
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(ArgumentParseError) => ExitCode::FAILURE,
    }
}
