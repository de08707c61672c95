use std::{collections::VecDeque, error::Error};

use quantum::{
    problem_selector::{ProblemResult, ProblemSelector, get_args},
    problems_impl,
};
use tunnelling::{
    config::TunnellingConfig,
    media::{MediaArtifact, find_animation},
    scenes::{FissionFrames, FissionView, FusionPlot, frame_steps},
};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .init();

    Problems::select(&mut get_args())
}

pub struct Problems;

problems_impl!(Problems, "quantum tunnelling",
    "fusion tunnelling plot" => Problems::fusion_plot,
    "interactive fission simulation" => Problems::interactive_fission,
    "fission demo animation" => Problems::fission_animation,
    "fission animation frames" => Problems::fission_frames,
);

impl Problems {
    fn fusion_plot(_: &mut VecDeque<String>) -> ProblemResult {
        let config = TunnellingConfig::load()?;
        let plot = FusionPlot::new(&config.fusion)?;
        plot.save(&config.output.data_dir)?;

        log::info!(
            "Tunnelling probability rises from {:.3e} to {:.3e} over the energy range",
            plot.transmission.first().copied().unwrap_or(f64::NAN),
            plot.transmission.last().copied().unwrap_or(f64::NAN),
        );

        Ok(())
    }

    /// Arguments: barrier height, barrier width, simulation steps.
    fn interactive_fission(args: &mut VecDeque<String>) -> ProblemResult {
        let config = TunnellingConfig::load()?;

        let barrier_height = next_value(args)?;
        let barrier_width = next_value(args)?;
        let steps = next_value(args)?;
        let parameters = config
            .controls
            .resolve(barrier_height, barrier_width, steps);
        log::info!("Fission parameters: {:?}", parameters);

        let view = FissionView::new(&config.fission, parameters)?;
        view.save(&config.output.data_dir)?;

        if let Some(fraction) = view.retained_fraction {
            log::info!("Packet area retained after leakage: {:.3}", fraction);
        }

        Ok(())
    }

    fn fission_animation(_: &mut VecDeque<String>) -> ProblemResult {
        let config = TunnellingConfig::load()?;

        match find_animation(&config.output.results_dir) {
            MediaArtifact::Video(path) => log::info!(
                "MP4 animation of quantum tunnelling to fission: {}",
                path.display()
            ),
            MediaArtifact::Image(path) => log::info!(
                "GIF animation of fission tunnelling: {}",
                path.display()
            ),
            MediaArtifact::Missing => {}
        }

        Ok(())
    }

    /// Arguments: barrier height, barrier width.
    fn fission_frames(args: &mut VecDeque<String>) -> ProblemResult {
        let config = TunnellingConfig::load()?;

        let barrier_height = next_value(args)?;
        let barrier_width = next_value(args)?;
        let parameters = config.controls.resolve(barrier_height, barrier_width, None);

        let steps = frame_steps(&config.controls.steps);
        let frames = FissionFrames::new(&config.fission, parameters, &steps)?;
        frames.save(&config.output.data_dir)?;

        Ok(())
    }
}

fn next_value(args: &mut VecDeque<String>) -> Result<Option<f64>, Box<dyn Error>> {
    match args.pop_front() {
        Some(arg) => Ok(Some(arg.parse::<f64>().map_err(|err| {
            format!("unable to parse argument `{}`: {}", arg, err)
        })?)),
        None => Ok(None),
    }
}
