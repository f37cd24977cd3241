use schematic::cli::Mode;
use schematic::prelude::*;

fn main() -> Result<()> {
    let opts = Opts::parse()?;

    let stdout = std::io::stdout();
    let mut runner = Runner::new(&opts, stdout.lock());

    let result = run(&opts, &mut runner);

    if let Err(error) = &result {
        if opts.is_json() {
            runner.error(error)?;
        }
    }

    result
}

fn run<O>(opts: &Opts, runner: &mut Runner<'_, O>) -> Result<()>
where
    O: std::io::Write,
{
    if opts.sample() {
        runner.run(&Dataset::sample())?;
    }

    let dataset = Dataset::open(opts.path()).context("opening input")?;
    runner.run(&dataset)?;

    if matches!(opts.mode, Mode::Bench) {
        runner.total()?;
    }

    Ok(())
}
