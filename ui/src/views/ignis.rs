use dioxus::prelude::*;

use crate::analytics::{use_event_tracker, OBJECT_BUTTON};
use crate::components::CodeSample;

const LOGO: Asset = asset!("/assets/images/ignis-logo.svg");

const GITHUB_URL: &str = "https://github.com/Qiskit/qiskit-ignis";

/// Analytics action names for the page's tracked controls.
const ACTION_GITHUB: &str = "Qiskit Ignis: GitHub Repository";
const ACTION_COPY_SAMPLE: &str = "Qiskit Ignis: Copy Code Sample";

const MIN_PYTHON: &str = "3.6";

const INSTALL_SAMPLE: &str = "[python3] $ pip install qiskit";

const EXAMPLE_SAMPLE: &str = r#"import qiskit
from qiskit.providers.aer.noise import NoiseModel
from qiskit.providers.aer.noise.errors.standard_errors import depolarizing_error

# Import the RB Functions
from qiskit.ignis.verification.randomized_benchmarking import randomized_benchmarking_seq, RBFitter

# Generate RB circuits (2Q RB)
rb_opts = {}
rb_opts['length_vector'] = [1, 10, 20, 50, 75, 100, 125]
rb_opts['nseeds'] = 5
rb_opts['rb_pattern'] = [[0,1]]
rb_circs, xdata = randomized_benchmarking_seq(**rb_opts)

# Run on a noisy simulator
noise_model = NoiseModel()
noise_model.add_all_qubit_quantum_error(depolarizing_error(0.002, 1), ['u1', 'u2', 'u3'])
noise_model.add_all_qubit_quantum_error(depolarizing_error(0.002, 2), 'cx')

backend = qiskit.Aer.get_backend('qasm_simulator')

# Create the RB fitter
rb_fit = RBFitter(None, xdata, rb_opts['rb_pattern'])
for rb_seed, rb_circ_seed in enumerate(rb_circs):

    job = qiskit.execute(rb_circ_seed, backend=backend,
                         basis_gates=['u1','u2','u3','cx'],
                         noise_model=noise_model)

    # add data to the fitter
    rb_fit.add_data(job.result())
    print('After seed %d, EPC %f'%(rb_seed, rb_fit.fit[0]['epc']))
"#;

/// Where Ignis sits in a typical workflow, top to bottom.
const STACK: &[(&str, &[&str])] = &[
    ("Circuits", &["List of circuits generated by one of the Ignis modules"]),
    ("Qiskit Terra", &["Compile circuits"]),
    (
        "Execute circuits",
        &["QasmSimulator, StatevectorSimulator, UnitarySimulator"],
    ),
    ("Result", &["Counts, Memory, Statevector, Unitary, Snapshots"]),
    (
        "Fitter/Filter",
        &[
            "Take Ignis results and fit to a model/plot results",
            "Apply mitigation (if applicable)",
        ],
    ),
];

#[component]
pub fn Ignis() -> Element {
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let tracker = use_event_tracker();
    let on_github = {
        let tracker = tracker.clone();
        move |_| tracker.track_click(ACTION_GITHUB, OBJECT_BUTTON)
    };
    let on_copy = move |_| tracker.track_click(ACTION_COPY_SAMPLE, OBJECT_BUTTON);

    rsx! {
        div { style: "display:none", "{_lang_marker}" }
        section { class: "page page-ignis",
            header { class: "page-ignis__header",
                img {
                    class: "page-ignis__logo",
                    src: LOGO,
                    alt: crate::t!("ignis-alt-logo"),
                }
                div {
                    h1 { {crate::t!("ignis-header-title")} }
                    h2 { {crate::t!("ignis-header-subtitle")} }
                    div { class: "page-ignis__badges",
                        a {
                            href: GITHUB_URL,
                            target: "_blank",
                            rel: "noopener",
                            onclick: on_github,
                            span { class: "button button--ghost", {crate::t!("ignis-github")} }
                        }
                    }
                }
            }

            div { class: "page-ignis__row",
                div { class: "page-ignis__description",
                    h3 { {crate::t!("ignis-about-title")} }
                    p { {crate::t!("ignis-about-description")} }
                    h3 { {crate::t!("ignis-stack-title")} }
                    div { class: "stack-list",
                        for (title, subtitles) in STACK.iter() {
                            div { class: "stack-list__element", key: "{title}",
                                div { class: "stack-list__title", "{title}" }
                                for subtitle in subtitles.iter() {
                                    div { class: "stack-list__subtitle", "{subtitle}" }
                                }
                            }
                        }
                    }
                }
                div { class: "page-ignis__illustration",
                    h3 { {crate::t!("ignis-install-title")} }
                    p { class: "page-ignis__note",
                        {crate::t!("ignis-python-required", version = MIN_PYTHON)}
                    }
                    CodeSample { language: "bash", code: INSTALL_SAMPLE }
                    h3 { {crate::t!("ignis-example-title")} }
                    CodeSample {
                        language: "python",
                        code: EXAMPLE_SAMPLE,
                        copy_button: true,
                        on_copy: on_copy,
                    }
                }
            }
        }
    }
}
