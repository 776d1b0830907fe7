// Paper catalog.
// The five papers of the explainer and the Zep slide deck.

use chrono::NaiveDate;

use crate::content::types::{Paper, PaperTheme, Section, Slide, SlideDeck, SlideTheme};
use crate::diagrams::DiagramKind;
use crate::error::{DeckError, Result};
use crate::state::visual::{Mark, Tone, Visual};

/// Ordered collection of papers.
#[derive(Debug, Clone)]
pub struct Catalog {
    papers: Vec<Paper>,
}

impl Catalog {
    pub fn new(papers: Vec<Paper>) -> Self {
        Self { papers }
    }

    /// The papers shipped with the app.
    pub fn builtin() -> Result<Self> {
        Ok(Self::new(vec![
            alphaqubit(),
            zep()?,
            amem(),
            deep_research(),
            agent_r(),
        ]))
    }

    pub fn papers(&self) -> &[Paper] {
        &self.papers
    }

    pub fn len(&self) -> usize {
        self.papers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.papers.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Paper> {
        self.papers.get(index)
    }

    pub fn find(&self, id: &str) -> Option<&Paper> {
        self.papers.iter().find(|p| p.id == id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.papers.iter().position(|p| p.id == id)
    }

    /// Like `find`, but an unknown id is an error.
    pub fn require(&self, id: &str) -> Result<&Paper> {
        self.find(id)
            .ok_or_else(|| DeckError::UnknownPaper(id.to_string()))
    }
}

fn month(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or_default()
}

fn alphaqubit() -> Paper {
    Paper {
        id: "alphaqubit",
        title: "AlphaQubit",
        subtitle: "AI for Quantum Error Correction",
        summary: "Visualizing Nature (2024): A recurrent transformer-based neural network that learns to decode the surface code with unprecedented accuracy.",
        published: month(2024, 11),
        url: "https://doi.org/10.1038/s41586-024-08148-8",
        theme: PaperTheme::Stone,
        headline: ("AlphaQubit", "Decoding the Quantum Future"),
        tagline: "A neural network decoder that learns to correct the errors of a quantum processor from its own noisy measurements.",
        sections: vec![
            Section {
                kicker: "The Problem",
                heading: "Fragile Qubits",
                paragraphs: vec![
                    "Qubits are extraordinarily sensitive. Heat, stray fields and crosstalk flip their state long before a useful computation can finish.",
                    "The surface code spreads one logical qubit across many physical ones. Stabilizer measurements reveal where errors happened without disturbing the encoded information, but someone still has to read the resulting syndrome.",
                ],
            },
            Section {
                kicker: "The Innovation",
                heading: "A Learned Decoder",
                paragraphs: vec![
                    "AlphaQubit is a recurrent transformer. It reads the syndrome history round by round, attending to correlations across space and time that hand-built decoders approximate.",
                    "Trained first on simulated data and then fine-tuned on real hardware samples, it adapts to the actual noise of the device.",
                ],
            },
            Section {
                kicker: "Results",
                heading: "Beating the Standard",
                paragraphs: vec![
                    "Across code distances AlphaQubit reaches lower logical error rates than Minimum-Weight Perfect Matching, the decoder most systems use today.",
                ],
            },
        ],
        diagrams: vec![
            DiagramKind::SurfaceCode,
            DiagramKind::TransformerDecoder,
            DiagramKind::Performance,
        ],
        network_backdrop: false,
        slides: None,
    }
}

fn zep() -> Result<Paper> {
    Ok(Paper {
        id: "zep",
        title: "Zep: Living Memory",
        subtitle: "Long-term Memory for AI Agents",
        summary: "Visualizing arXiv (2025): A temporal knowledge graph engine that solves \"digital amnesia\" in autonomous agents.",
        published: month(2025, 1),
        url: "https://arxiv.org/html/2501.13956v1",
        theme: PaperTheme::Blue,
        headline: ("Living Memory", "for AI Agents"),
        tagline: "Introducing Zep and the Graphiti Engine: Solving \"Digital Amnesia\" with a dynamic, bi-temporal Knowledge Graph.",
        sections: vec![
            Section {
                kicker: "The Problem",
                heading: "Digital Amnesia",
                paragraphs: vec![
                    "The Future of AI is Agentic. But today's agents have a critical flaw: they can't remember. This \"digital amnesia\" turns powerful tools into forgetful assistants.",
                    "Traditional fixes like RAG are brittle. They retrieve static documents but fail to understand how facts evolve over time. If a user changes their mind (\"I used to like Adidas, now I want Nike\") standard systems either hallucinate or get stuck in the past. To solve complex problems, agents need a living memory.",
                ],
            },
            Section {
                kicker: "The Innovation",
                heading: "The Graphiti Engine",
                paragraphs: vec![
                    "Zep is powered by Graphiti, a temporal Knowledge Graph designed for changing data. Unlike static vector databases, it uses a \"bi-temporal\" model.",
                    "It tracks two timelines: Transaction Time (when the AI learned a fact) and Valid Time (when the fact is true in the world). This allows the agent to resolve contradictions without deleting history.",
                ],
            },
            Section {
                kicker: "Performance",
                heading: "Engineered for Speed",
                paragraphs: vec![
                    "By performing complex data structuring during ingestion, retrieval becomes a highly optimized database operation. Zep eliminates slow, expensive LLM calls at query time.",
                ],
            },
        ],
        diagrams: vec![DiagramKind::TemporalGraph, DiagramKind::Efficiency],
        network_backdrop: true,
        slides: Some(zep_slides()?),
    })
}

fn amem() -> Paper {
    Paper {
        id: "amem",
        title: "A-MEM",
        subtitle: "Self-Organizing Agent Memory",
        summary: "Visualizing arXiv (2025): Agents that actively link, merge, and refine their own memories using a Zettelkasten-inspired approach.",
        published: month(2025, 2),
        url: "https://arxiv.org/abs/2502.12110",
        theme: PaperTheme::Emerald,
        headline: ("A-MEM", "Self-Organizing Minds"),
        tagline: "Agents that organize their own memories using the Zettelkasten method, evolving a structured \"mind\" instead of a chaotic database.",
        sections: vec![
            Section {
                kicker: "The Concept",
                heading: "Beyond Vector Storage",
                paragraphs: vec![
                    "Most agents simply dump text into a vector database. Over time, this becomes a \"digital junk drawer\" full of noise and duplicates.",
                    "A-MEM proposes that agents should act like researchers. When they learn something new, they actively link it to related ideas, merge duplicates, and refine their understanding, inspired by the Zettelkasten note-taking method.",
                ],
            },
            Section {
                kicker: "Memory Evolution",
                heading: "Active Structuring",
                paragraphs: vec![
                    "A-MEM triggers a \"Memory Evolution\" process. It detects when new information conflicts with or enhances old data.",
                    "Merging: Compressing redundant observations into a single fact.",
                    "Linking: Connecting disparate events (e.g. \"Thunder\" and \"Rain\") to form causal models.",
                ],
            },
        ],
        diagrams: vec![DiagramKind::Zettelkasten],
        network_backdrop: true,
        slides: None,
    }
}

fn deep_research() -> Paper {
    Paper {
        id: "deep-research",
        title: "Deep Research Memory",
        subtitle: "Just-in-Time Context Construction",
        summary: "Visualizing arXiv (2025): A system that treats memory recall as an active, deep research process rather than a database lookup.",
        published: month(2025, 11),
        url: "https://arxiv.org/abs/2511.18423",
        theme: PaperTheme::Purple,
        headline: ("Deep Research", "Just-in-Time Memory"),
        tagline: "Why index everything? This system treats memory recall as an active, real-time research project for every complex query.",
        sections: vec![
            Section {
                kicker: "The Paradigm Shift",
                heading: "Against Pre-Computation",
                paragraphs: vec![
                    "Traditional RAG systems try to \"pre-compute\" relevance by turning everything into vectors. But you can't predict what specific detail will be important for a future question.",
                    "Just-in-Time Memory argues that we should leave history raw and unstructured. When the agent faces a problem, it spawns a \"Researcher\" sub-agent that actively queries this raw history, constructing a bespoke memory context on the fly.",
                ],
            },
            Section {
                kicker: "Dynamic Retrieval",
                heading: "Active Investigation",
                paragraphs: vec![
                    "Instead of a simple database lookup, recall becomes a multi-step workflow.",
                    "The system breaks a complex user goal into sub-questions, runs parallel searches across its history, and synthesizes the results. It trades a few seconds of latency for vastly higher precision and context awareness.",
                ],
            },
        ],
        diagrams: vec![DiagramKind::DeepResearch],
        network_backdrop: false,
        slides: None,
    }
}

fn agent_r() -> Paper {
    Paper {
        id: "agent-r",
        title: "Agent-R",
        subtitle: "Reflective Memory",
        summary: "Visualizing arXiv (2025): Training language model agents to reflect on past failures and store self-critiques for future improvement.",
        published: month(2025, 1),
        url: "https://arxiv.org/abs/2501.11425",
        theme: PaperTheme::Orange,
        headline: ("Agent-R", "Learning to Reflect"),
        tagline: "Memory isn't just data, it's experience. Agent-R trains agents to critique their own past mistakes and store those lessons.",
        sections: vec![
            Section {
                kicker: "The Problem",
                heading: "Repeating Mistakes",
                paragraphs: vec![
                    "Standard agents are stateless between sessions. If an agent fails to solve a coding problem today, it will likely fail in the exact same way tomorrow.",
                    "Agent-R introduces \"Reflective Memory.\" It uses iterative self-training to force the agent to analyze its own failure traces, generate a natural language critique, and store that critique.",
                ],
            },
            Section {
                kicker: "Self-Correction",
                heading: "The Feedback Loop",
                paragraphs: vec![
                    "When faced with a similar task in the future, the agent retrieves its past self-critique.",
                    "\"Last time I tried to use library X, it failed because of version incompatibility. I should use library Y instead.\" This allows the model to patch its own behavior without retraining.",
                ],
            },
        ],
        diagrams: vec![DiagramKind::ReflectionLoop],
        network_backdrop: false,
        slides: None,
    }
}

fn zep_slides() -> Result<SlideDeck> {
    SlideDeck::new(vec![
        Slide::new(
            "1",
            "The Future of AI is Agentic",
            "Agents are powerful, but they have a fatal flaw: Digital Amnesia.\n\nWithout a persistent memory, they are merely forgetful assistants, unable to learn from interactions or solve complex, long-horizon problems.",
        )
        .subtitle("The Problem")
        .theme(SlideTheme::Alert)
        .visual(
            Visual::new()
                .with_mark(Mark::arc(50.0, 40.0, 18.0, 1.0).tone(Tone::Muted).faint())
                .with_mark(Mark::label(50.0, 40.0, "?").tone(Tone::Muted))
                .with_mark(Mark::label(50.0, 75.0, "MEMORY_NOT_FOUND").tone(Tone::Muted)),
        ),
        Slide::new(
            "2",
            "When Memory Fails",
            "Consider a user who says 'I only wear Adidas' in September, but switches to 'I'll be wearing Nike' in October.\n\nStandard agents fail to resolve this contradiction. They either hallucinate or stubbornly stick to the old fact, delivering a frustrating experience.",
        )
        .subtitle("Use Case")
        .visual(
            Visual::new()
                .with_mark(Mark::square(20.0, 50.0, 28.0).tone(Tone::Muted).faint())
                .with_mark(Mark::label(20.0, 40.0, "Sept 07").tone(Tone::Muted))
                .with_mark(Mark::label(20.0, 55.0, "Adidas").tone(Tone::Ink).faint())
                .with_mark(Mark::line(38.0, 50.0, 62.0, 50.0).tone(Tone::Red))
                .with_mark(Mark::square(80.0, 50.0, 28.0).tone(Tone::Red))
                .with_mark(Mark::label(80.0, 40.0, "Oct 14").tone(Tone::Red))
                .with_mark(Mark::label(80.0, 55.0, "Nike").tone(Tone::Ink).strong()),
        ),
        Slide::new(
            "3",
            "Why RAG Fails",
            "Traditional RAG (Retrieval Augmented Generation) and Vector Databases are optimized for similarity, not truth.\n\nThey inject massive, unfiltered text into prompts ('Context Stuffing'), causing extreme latency, high costs, and confusion about which facts are current.",
        )
        .subtitle("Current Tech")
        .theme(SlideTheme::Alert)
        .visual(
            Visual::new()
                .with_mark(Mark::track(40.0, 0.0, 100.0).tone(Tone::Muted))
                .with_mark(Mark::label(50.0, 40.0, "115,000 Tokens (Waste)").tone(Tone::Muted))
                .with_mark(Mark::label(50.0, 75.0, "~30s Latency").tone(Tone::Red).strong()),
        ),
        Slide::new(
            "4",
            "Zep: Living Memory",
            "Zep gives agents a dynamic, persistent memory that grows smarter with every interaction.\n\nIt continuously learns and adapts, fusing chat history and business data into a unified, evolving Knowledge Graph.",
        )
        .subtitle("The Solution")
        .theme(SlideTheme::Brand)
        .visual(
            Visual::new()
                .with_mark(Mark::dot(50.0, 50.0, 30.0).tone(Tone::Blue).faint())
                .with_mark(Mark::arc(50.0, 50.0, 22.0, 1.0).tone(Tone::Blue).strong())
                .with_mark(Mark::label(50.0, 50.0, "Zep").tone(Tone::Blue).strong()),
        ),
        Slide::new(
            "5",
            "Bi-Temporal Graph",
            "The Graphiti Engine uses a bi-temporal model, tracking two timelines for every fact:\n1. Valid Time (When it's true)\n2. Transaction Time (When we learned it)\n\nThis resolves contradictions without deleting history.",
        )
        .subtitle("Architecture")
        .visual(
            Visual::new()
                .with_mark(Mark::label(10.0, 35.0, "◷ T_VALID: 2024-10-14").tone(Tone::Blue))
                .with_mark(Mark::label(10.0, 65.0, "▤ T_RECORDED: 2024-10-14").tone(Tone::Muted)),
        ),
        Slide::new(
            "6",
            "Engineered for Speed",
            "By structuring data during ingestion, retrieval becomes a fast database operation.\n\n• 90% Lower Latency (<200ms)\n• 98% Fewer Tokens\n• No LLM calls at query time",
        )
        .subtitle("Performance")
        .theme(SlideTheme::Brand)
        .visual(
            Visual::new()
                .with_mark(Mark::square(25.0, 50.0, 40.0).tone(Tone::Green).faint())
                .with_mark(Mark::label(25.0, 45.0, "200ms").tone(Tone::Green).strong())
                .with_mark(Mark::label(25.0, 60.0, "Latency").tone(Tone::Green))
                .with_mark(Mark::square(75.0, 50.0, 40.0).tone(Tone::Blue).faint())
                .with_mark(Mark::label(75.0, 45.0, "1.6k").tone(Tone::Blue).strong())
                .with_mark(Mark::label(75.0, 60.0, "Tokens").tone(Tone::Blue)),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_has_five_papers() {
        let catalog = Catalog::builtin().unwrap();
        let ids: Vec<_> = catalog.papers().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["alphaqubit", "zep", "amem", "deep-research", "agent-r"]);
    }

    #[test]
    fn test_only_zep_has_slides() {
        let catalog = Catalog::builtin().unwrap();
        for paper in catalog.papers() {
            assert_eq!(paper.has_slides(), paper.id == "zep", "{}", paper.id);
        }
        let deck = catalog.find("zep").and_then(|p| p.slides.as_ref()).unwrap();
        assert_eq!(deck.len(), 6);
        assert_eq!(deck[0].theme, SlideTheme::Alert);
        assert_eq!(deck[3].subtitle.as_deref(), Some("The Solution"));
    }

    #[test]
    fn test_require_unknown_paper() {
        let catalog = Catalog::builtin().unwrap();
        assert!(catalog.require("agent-r").is_ok());
        assert!(matches!(
            catalog.require("nope"),
            Err(DeckError::UnknownPaper(id)) if id == "nope"
        ));
    }

    #[test]
    fn test_date_labels() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.find("alphaqubit").unwrap().date_label(), "Nov 2024");
        assert_eq!(catalog.find("deep-research").unwrap().date_label(), "Nov 2025");
    }

    #[test]
    fn test_every_paper_mounts_a_diagram() {
        let catalog = Catalog::builtin().unwrap();
        assert!(catalog.papers().iter().all(|p| !p.diagrams.is_empty()));
        assert_eq!(catalog.position("amem"), Some(2));
    }
}
