use std::{fs::File, io::prelude::*, thread, time::Duration};

use docopt::Docopt;
use log::{debug, info, LevelFilter};
use serde_derive::Deserialize;
use simple_logger::SimpleLogger;
use smallvec::smallvec;

use mazeball::{
    build_queue::BuildQueue,
    environment::{MazeEnvironment, MazeSettings, MazeSettingsBuilder},
    generators::Algorithm,
    grid_display::{GridDisplay, GridText, PathDisplay, StartEndPointsDisplay},
    maze::Maze,
    pathing,
    placement::GroundRegion,
};

const USAGE: &str = "MazeBall maze driver

Usage:
    maze_driver -h | --help
    maze_driver [--width=<w>] [--height=<h>] [--start=<loc>] [--end=<loc>] [--algorithm=<name>] [--seed=<n>] [--wall-thickness=<t>] [--wall-height=<y>] [--build-interval=<ms>] [--replay] [(--show-path|--show-distances|--longest-path)] [--text-out=<path>] [-v...]

Options:
    -h --help                Show this screen.
    --width=<w>              Maze width in cells [default: 10].
    --height=<h>             Maze height in cells [default: 10].
    --start=<loc>            Start cell location, e.g. left-upper, center-middle [default: left-upper].
    --end=<loc>              End cell location [default: right-lower].
    --algorithm=<name>       frontier-growth, recursive-backtracker or union-find [default: frontier-growth].
    --seed=<n>               Seed for a reproducible maze. Random when missing.
    --wall-thickness=<t>     Wall thickness in ground units [default: 0.3].
    --wall-height=<y>        Wall height in ground units [default: 0.5].
    --build-interval=<ms>    Pause between walls when replaying the build queue [default: 100].
    --replay                 Log every queued wall transition, paced by the build interval.
    --show-path              Mark the path from the start to the end cell.
    --show-distances         Show the distance from the start cell to every cell.
    --longest-path           Mark the longest path in the maze.
    --text-out=<path>        Write the text rendering to a file instead of stdout.
    -v                       More logging, repeat for more.
";

#[derive(Debug, Deserialize)]
struct MazeArgs {
    flag_width: i32,
    flag_height: i32,
    flag_start: String,
    flag_end: String,
    flag_algorithm: String,
    flag_seed: Option<u64>,
    flag_wall_thickness: f32,
    flag_wall_height: f32,
    flag_build_interval: u64,
    flag_replay: bool,
    flag_show_path: bool,
    flag_show_distances: bool,
    flag_longest_path: bool,
    flag_text_out: String,
    flag_v: usize,
}

mod errors {
    use error_chain::*;
    error_chain! {
        links {
            Maze(::mazeball::errors::Error, ::mazeball::errors::ErrorKind);
        }

        foreign_links {
            DocOptFailure(::docopt::Error);
            Io(::std::io::Error);
            Logger(::log::SetLoggerError);
        }
    }
}
use crate::errors::*;

/// A console host: the ground is sized one unit per cell and walls are reported as log lines.
struct TextEnvironment {
    settings: MazeSettings,
    queue: BuildQueue,
}

impl TextEnvironment {
    fn new(settings: MazeSettings) -> TextEnvironment {
        TextEnvironment {
            settings,
            queue: BuildQueue::new(),
        }
    }

    /// Consume everything the maze has queued so far.
    fn materialize(&self, replay: bool) {
        let events = self.queue.drain();
        let raised = events.iter().filter(|e| e.has_wall).count();
        info!("{} wall transitions queued, {} raised, {} broken",
              events.len(),
              raised,
              events.len() - raised);

        if !replay {
            return;
        }
        for event in events.iter().filter(|e| !e.has_wall) {
            let center = event.placement.center;
            debug!("break {} at ({:.2}, {:.2}, {:.2})", event.wall, center.x, center.y, center.z);
            thread::sleep(self.settings.build_interval);
        }
    }
}

impl MazeEnvironment for TextEnvironment {
    fn settings(&self) -> &MazeSettings {
        &self.settings
    }

    fn build_ground(&mut self) -> GroundRegion {
        GroundRegion::for_size(self.settings.size)
    }

    fn build_queue(&self) -> BuildQueue {
        self.queue.clone()
    }
}

fn main() -> Result<()> {
    let args: MazeArgs = Docopt::new(USAGE).and_then(|d| d.deserialize())?;

    let level = match args.flag_v {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    SimpleLogger::new().with_level(level).env().init()?;

    let settings = MazeSettingsBuilder::new()
        .size(args.flag_width, args.flag_height)
        .start(args.flag_start.parse()?)
        .end(args.flag_end.parse()?)
        .algorithm(args.flag_algorithm.parse::<Algorithm>()?)
        .seed(args.flag_seed)
        .wall_thickness(args.flag_wall_thickness)
        .wall_height(args.flag_wall_height)
        .build_interval(Duration::from_millis(args.flag_build_interval))
        .build()?;

    let mut environment = TextEnvironment::new(settings);
    let mut maze = Maze::new(&mut environment)?;
    maze.generate_seeded()?;
    environment.materialize(args.flag_replay);

    let text = render_text(&maze, &args)?;
    if args.flag_text_out.is_empty() {
        print!("{}", text);
    } else {
        write_text_to_file(&text, &args.flag_text_out)
            .chain_err(|| format!("Failed to write maze to text file {}", args.flag_text_out))?;
    }

    Ok(())
}

fn render_text(maze: &Maze, args: &MazeArgs) -> Result<String> {
    let grid = maze.grid();
    let (start, end) = (maze.visitor().start(), maze.visitor().end());
    let distances = pathing::Distances::new(grid, start)?;

    let display: Box<dyn GridDisplay> = if args.flag_show_distances {
        Box::new(distances)
    } else if args.flag_longest_path {
        Box::new(PathDisplay::new(&pathing::longest_path(grid)?))
    } else if args.flag_show_path {
        match pathing::shortest_path(grid, &distances, end) {
            Some(path) => Box::new(PathDisplay::new(&path)),
            // Only a broken maze has no route, fall back to marking the ends
            None => Box::new(StartEndPointsDisplay::new(smallvec![start], smallvec![end])),
        }
    } else {
        Box::new(StartEndPointsDisplay::new(smallvec![start], smallvec![end]))
    };

    Ok(GridText::new(grid, Some(display.as_ref())).to_string())
}

fn write_text_to_file(data: &str, file_name: &str) -> std::io::Result<()> {
    let mut f = File::create(file_name)?;
    f.write_all(data.as_bytes())?;
    Ok(())
}
