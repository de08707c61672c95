use std::path::Path;

use quantum::{
    particles::{Particle, create_nuclide},
    problem_selector::{ProblemResult, ProblemSelector, get_args},
    problems_impl,
    units::{
        Au,
        distance_units::{Distance, Femtometer},
        energy_units::{Energy, MeV},
    },
    utility::{linspace, unit_linspace},
};
use tunnelling::{
    barrier_model::{BarrierParameters, compute_transmission},
    grid::Grid,
    output::save_data,
};

pub fn main() -> ProblemResult {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    Problems::select(&mut get_args())
}

pub struct Problems;

problems_impl!(Problems, "barrier scan",
    "width scan" => |_| Self::width_scan(),
    "height scan" => |_| Self::height_scan(),
    "nuclide comparison" => |_| Self::nuclide_comparison(),
);

impl Problems {
    fn data_dir() -> &'static Path {
        Path::new("data")
    }

    fn particle() -> Result<Particle, String> {
        create_nuclide("p").ok_or_else(|| "unknown nuclide".to_string())
    }

    fn width_scan() -> ProblemResult {
        let proton = Self::particle()?;
        let energy = Energy(0.5, MeV).to_au();

        let widths = linspace(2.0, 25.0, 200);
        let transmissions = widths
            .iter()
            .map(|&width| {
                BarrierParameters::from_units(
                    Energy(1.0, MeV),
                    Distance(width, Femtometer),
                    proton.mass(),
                )
                .map(|barrier| barrier.transmission(energy))
            })
            .collect::<Result<Vec<f64>, _>>()?;

        let header = "barrier width [fm]\ttunnelling probability";
        save_data(
            Self::data_dir(),
            "barrier_scan/width",
            header,
            &[&widths, &transmissions],
        )?;

        Ok(())
    }

    fn height_scan() -> ProblemResult {
        let proton = Self::particle()?;
        let energies = unit_linspace(Energy(0.01, MeV), Energy(3.0, MeV), 300);
        let energy_grid = Grid::new(energies.iter().map(|e| e.to(Au).value()).collect());
        let energy_values: Vec<f64> = energies.iter().map(|e| e.value()).collect();

        let mut data = vec![energy_values];
        for height in [1.0, 2.0, 3.0] {
            let barrier = BarrierParameters::from_units(
                Energy(height, MeV),
                Distance(10.0, Femtometer),
                proton.mass(),
            )?;

            data.push(compute_transmission(&energy_grid, &barrier)?.into_inner());
        }

        let columns: Vec<&[f64]> = data.iter().map(|column| column.as_slice()).collect();
        let header = "energy [MeV]\tV0 = 1 MeV\tV0 = 2 MeV\tV0 = 3 MeV";
        save_data(Self::data_dir(), "barrier_scan/height", header, &columns)?;

        Ok(())
    }

    fn nuclide_comparison() -> ProblemResult {
        let energy = Energy(0.5, MeV).to_au();

        for name in ["p", "d", "t", "alpha"] {
            let particle = create_nuclide(name).ok_or_else(|| format!("unknown nuclide {name}"))?;
            let barrier = BarrierParameters::from_units(
                Energy(1.0, MeV),
                Distance(10.0, Femtometer),
                particle.mass(),
            )?;

            println!(
                "{:>6}: tunnelling probability {:.3e}",
                particle.name(),
                barrier.transmission(energy)
            );
        }

        Ok(())
    }
}
