use anyhow::Result;
use clap::{Parser, Subcommand};
use orbit_core::{OrbitDirection, OrbitSpec, StagePoint};
use orbit_engine::{sample_entry, EngineConfig, OrbitEngine};
use orbit_plan::{solve, MotionPlan, PlanConfig};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "orbit")]
#[command(about = "Scroll-orbit motion plan tooling")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a configuration and write the baked plan JSON
    Bake {
        #[arg(short, long, default_value = "plan.json")]
        output: PathBuf,

        /// Orbit radius (stage px)
        #[arg(long, default_value = "240")]
        radius: f64,

        /// Orbit center as "x,y"
        #[arg(long, default_value = "400,200")]
        center: String,

        /// Counter-clockwise travel (default is clockwise)
        #[arg(long, default_value = "false")]
        ccw: bool,

        /// Start column x
        #[arg(long, default_value = "160")]
        start_x: f64,

        /// Bottom (anchor) start y
        #[arg(long, default_value = "690")]
        start_y: f64,

        /// Vertical spacing between column starts
        #[arg(long, default_value = "190")]
        spacing: f64,

        /// Final triangle rotation (degrees)
        #[arg(long, default_value = "0")]
        rotation: f64,

        /// Linear-phase emphasis factor k
        #[arg(long, default_value = "2.0")]
        emphasis: f64,
    },

    /// Print a baked plan's timeline
    Inspect {
        plan: PathBuf,
    },

    /// Sample object positions at one plan time or scroll progress
    Sample {
        plan: PathBuf,

        /// Normalized plan time in [0, 1]
        #[arg(short, long)]
        t: Option<f64>,

        /// Raw scroll progress in [0, 1] (mapped through the gate)
        #[arg(short, long)]
        scroll: Option<f64>,

        /// Scroll gate threshold used with --scroll
        #[arg(long, default_value = "0.16")]
        gate: f64,

        /// Linear-phase emphasis factor k used with --t
        #[arg(long, default_value = "2.0")]
        emphasis: f64,
    },

    /// Emit CSV frames over the full scroll range
    Sweep {
        plan: PathBuf,

        #[arg(long, default_value = "100")]
        steps: usize,

        /// Scroll gate threshold
        #[arg(long, default_value = "0.16")]
        gate: f64,
    },

    /// Validate a baked plan's invariants
    Check {
        plan: PathBuf,
    },
}

fn parse_center(center: &str) -> Result<StagePoint> {
    let coords: Vec<f64> = center
        .split(',')
        .map(|s| s.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()?;

    if coords.len() != 2 {
        anyhow::bail!("Center must be x,y");
    }
    Ok(StagePoint::new(coords[0], coords[1]))
}

fn print_plan(plan: &MotionPlan) {
    println!("Motion plan:");
    println!("  Angular velocity: {:.6} rad/unit", plan.angular_velocity);
    println!("  Linear velocity:  {:.4} px/unit", plan.linear_velocity);
    println!(
        "  Orbit: center ({:.1}, {:.1}), radius {:.1}, {:?}",
        plan.orbit.center.x, plan.orbit.center.y, plan.orbit.radius, plan.orbit.direction
    );
    println!();
    println!("  obj     s        t1       t2       delta      tangent");
    for (i, e) in plan.entries.iter().enumerate() {
        println!(
            "  {}    {:.4}   {:.4}   {:.4}   {:+.4}    ({:.1}, {:.1}) @ {:.4}",
            i,
            e.start_offset,
            e.linear_end,
            e.orbit_end,
            e.angular_delta,
            e.tangent.x,
            e.tangent.y,
            e.tangent_angle
        );
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Bake {
            output,
            radius,
            center,
            ccw,
            start_x,
            start_y,
            spacing,
            rotation,
            emphasis,
        } => {
            let direction = if ccw {
                OrbitDirection::CounterClockwise
            } else {
                OrbitDirection::Clockwise
            };
            let orbit = OrbitSpec::new(parse_center(&center)?, radius, direction);

            let mut config = PlanConfig::column(orbit, start_x, start_y, spacing);
            config.polygon_rotation_deg = rotation;
            config.linear_emphasis = emphasis;

            let plan = solve(&config);
            plan.check()?;
            plan.save(&output)?;

            print_plan(&plan);
            println!();
            println!("Baked plan written to {}", output.display());
        }

        Commands::Inspect { plan } => {
            let plan = MotionPlan::load(&plan)?;
            print_plan(&plan);
        }

        Commands::Sample {
            plan,
            t,
            scroll,
            gate,
            emphasis,
        } => {
            let plan = MotionPlan::load(&plan)?;

            match (t, scroll) {
                (Some(t), None) => {
                    for (i, e) in plan.entries.iter().enumerate() {
                        let p = sample_entry(e, &plan.orbit, t, emphasis);
                        println!("obj {}: ({:.4}, {:.4})", i, p.x, p.y);
                    }
                }
                (None, Some(scroll)) => {
                    let config = EngineConfig {
                        gate_threshold: gate,
                        ..EngineConfig::default()
                    };
                    let mut engine = OrbitEngine::new(config);
                    engine.set_plan(plan);

                    let frame = engine.advance(scroll);
                    println!(
                        "plan time {:.4} (play {:.4}), stage offset {:.2}, title {:.3}",
                        frame.plan_time, frame.play_time, frame.stage_offset_y, frame.title_opacity
                    );
                    for (i, o) in frame.objects.iter().enumerate() {
                        println!(
                            "obj {}: ({:.4}, {:.4})  label {:.3}  {:?}",
                            i, o.position.x, o.position.y, o.label_opacity, o.phase
                        );
                    }
                }
                _ => anyhow::bail!("Pass exactly one of --t or --scroll"),
            }
        }

        Commands::Sweep { plan, steps, gate } => {
            let plan = MotionPlan::load(&plan)?;
            let config = EngineConfig {
                gate_threshold: gate,
                ..EngineConfig::default()
            };
            let mut engine = OrbitEngine::new(config);
            engine.set_plan(plan);

            println!(
                "progress,plan_time,x0,y0,label0,x1,y1,label1,x2,y2,label2,stage_y,title"
            );
            for i in 0..=steps {
                let progress = i as f64 / steps.max(1) as f64;
                let frame = engine.advance(progress);

                print!("{:.4},{:.6}", progress, frame.plan_time);
                for o in &frame.objects {
                    print!(",{:.4},{:.4},{:.4}", o.position.x, o.position.y, o.label_opacity);
                }
                println!(",{:.4},{:.4}", frame.stage_offset_y, frame.title_opacity);
            }
        }

        Commands::Check { plan } => {
            let loaded = MotionPlan::load(&plan)?;
            loaded.check()?;
            println!("Plan OK: {} entries, timeline spans [0, 1]", loaded.entries.len());
        }
    }

    Ok(())
}
