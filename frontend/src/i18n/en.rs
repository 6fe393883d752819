use super::*;

pub static EN: Translations = Translations {
    navbar: Navbar {
        home: "Home",
        manifesto: "System Modules",
        security: "Security",
        request_protocol: "Request Protocol",
        toggle_short: "ID",
        toggle_long: "Switch to ID",
    },
    hero: Hero {
        badge: "Cognitive Intelligence",
        title_part1: "IN LAW, A",
        title_part2: "HALLUCINATION",
        title_part3: "IS A LIABILITY.",
        subtitle: "With defense-grade jurisprudence regulatory intelligence, Lexia offers a database for zero hallucinations.",
        cta: "Schedule a Protocol",
        dashboard: HeroDashboard {
            probabilistic_truth: "Probabilistic Truth: 100.0%",
            zero_hallucinations: "ZERO HALLUCINATIONS",
            system_operational: "System Operational",
        },
    },
    problem: Problem {
        section_title: "THE PROBLEM WITH",
        section_title_highlight: "GENERIC AI",
        description: "General purpose models like GPT-4 or Claude are trained on the open web, not Indonesian jurisprudence. When applied to high-stakes corporate law, they fail in three critical dimensions.",
        error_label: "FATAL ERROR",
        items: &[
            Item {
                title: "Missing Context",
                desc: "AI lacks training on Indonesian legislative regulations, court decisions, and specific jurisprudential nuances required for accurate legal work.",
            },
            Item {
                title: "Data Risks",
                desc: "Public AI services store and train on user data, creating massive risks for client confidentiality and privilege breaches.",
            },
            Item {
                title: "False Confidence",
                desc: "General purpose LLMs hallucinate cases and statutes that do not exist, delivering them with high confidence that can lead to liability.",
            },
        ],
    },
    features: Features {
        title: "System",
        title_highlight: "Modules",
        description: "A unified operating system for Indonesian legal compliance.\nBuilt for precision, speed, and absolute sovereignty.",
        status: "ALL SYSTEMS NOMINAL",
        tab_modules: "PLATFORM MODULES",
        tab_security: "SECURITY PERIMETER",
        cards: FeatureCards {
            discovery: DiscoveryCard {
                title: "Discovery Engine",
                desc: "Unified neural search across internal documents and national regulations (OJK, BI, MA). Context-aware retrieval augmented generation tailored for Indonesian law.",
                module: "Module 01",
                scanning: "Scanning Regulatory Database...",
            },
            harmonization: HarmonizationCard {
                title: "Harmonization",
                desc: "Automated conflict checks against 12,000+ statutes.",
                stats: &[
                    Stat { label: "Conflict Check", value: "85%" },
                    Stat { label: "Precedent Match", value: "60%" },
                ],
            },
            drafting: Item {
                title: "Smart Drafting",
                desc: "AI-assisted contract generation with clause libraries.",
            },
            risk: RiskCard {
                title: "Risk Scanner",
                desc: "Real-time liability analysis.",
                metric: "Accuracy Rate",
            },
            compliance: Item {
                title: "Compliance",
                desc: "Instant gap analysis report.",
            },
            repository: RepositoryCard {
                title: "Repository",
                desc: "Secure centralized vault.",
                encrypted: "ENCRYPTED",
                secure: "SECURE",
            },
        },
    },
    security_perimeter: SecurityPerimeter {
        title: "Google Cloud Security Perimeter",
        subtitle: "Built on the 4 Pillars of Government-Grade Cloud Security",
        pillars: &[
            Pillar {
                code: "CMEK",
                desc: "Encryption keys are managed by Company, not by Google. Full control over cryptographic shredding.",
            },
            Pillar {
                code: "DRZ",
                desc: "Data Residency Zones. Storage and processing pinned strictly to Jakarta. No data distribution.",
            },
            Pillar {
                code: "AxT",
                desc: "Assured Workloads. Compliance with Indonesian financial and government regulations.",
            },
            Pillar {
                code: "VPC-SC",
                desc: "VPC Service Controls. Define a security perimeter around Google Cloud resources to mitigate data exfiltration.",
            },
        ],
        flow: SecurityFlow {
            title: "Secure Information Flow",
            user: "User",
            steps: &[
                FlowStep { label: "WAF & Auth", sublabel: "IAP + DDoS Protection" },
                FlowStep { label: "SDP Scanner", sublabel: "PII & Sensitive Data" },
                FlowStep { label: "Safety Filter", sublabel: "Context Validation" },
            ],
            model: "Gemini LLM",
        },
    },
    discovery_modal: DiscoveryModal {
        badge: "LEGAL KNOWLEDGE DISCOVERY",
        headline_start: "Stop Searching for Keywords.\n",
        headline_highlight: "Start Finding Answers.",
        subheadline: "Turn your static archive into a Living Intelligence. Deep semantic search across your internal legacy documents.",
        features_title: "Hybrid Intelligence Capabilities",
        library: Item {
            title: "The Living Internal Library",
            desc: "Enterprise OCR ingests scanned deeds and messy PDFs.",
        },
        vectorization: Item {
            title: "Semantic Vectorization",
            desc: "Finds concepts, not just words. Bridges language gaps.",
        },
        bridge: Item {
            title: "The External Bridge",
            desc: "Safe Google Search Grounding for recent court verdicts.",
        },
        cta: "Request a Demo",
        static_archive: StaticArchive {
            title: "The Static Archive Trap",
            subtitle: "Why traditional document management fails modern legal teams.",
            card1: Item {
                title: "The Internal Graveyard",
                desc: "Shared drives full of unsearchable PDFs. You miss critical legacy data because it's buried in scanned images and poorly named files.",
            },
            card2: Item {
                title: "The External Wild West",
                desc: "Frantically Googling for regulations, risking reliance on unverified blogs, outdated articles, and hallucinating AI chatbots.",
            },
        },
        footer: "Don't let your data gather dust.",
    },
    harmonization_modal: HarmonizationModal {
        badge: "REGULATORY HARMONIZATION",
        headline_start: "Your Rules. Your Hierarchy.\n",
        headline_highlight: "One Single Source of Truth.",
        subheadline: "Generic AI stops at national law. Lexia customizes the logic engine to incorporate your specific internal Regulations, creating a unified compliance shield.",
        cta: "Schedule a Workshop",
        logic_stack: LogicStack {
            title: "The Customizable Logic Stack",
            subtitle: "Seamlessly blending public law with your private corporate governance.",
            public_shield: Shield {
                title: "The Public Shield",
                tag: "FIXED",
                items: &["Constitution (UUD 1945)", "Statutes (UU)", "Government Regulations (PP)"],
            },
            corporate_shield: Shield {
                title: "The Corporate Shield",
                tag: "CUSTOM",
                items: &["Articles of Association", "Board Manual (SK Direksi)", "Operational SOPs"],
            },
            protocol_prefix: "Lexia Protocol: If an Internal Regulation is stricter than National Law, Lexia enforces ",
            protocol_highlight: "YOUR",
            protocol_suffix: " rule automatically.",
        },
        comparison: Comparison {
            badge: "The Internal Blind Spot",
            title: "Why Generic AI Fails Enterprise Compliance",
            scenario: "SCENARIO",
            scenario_title: "\"Procurement Project worth Rp 150 Million\"",
            generic: Verdict {
                title: "Generic AI",
                status: "Approved",
                description: "National Law (Perpres Pengadaan) allows Direct Appointment for projects under Rp 200M.",
                result: "Result: Compliance Violation",
            },
            lexia: Verdict {
                title: "Lexia",
                status: "BLOCKED",
                description: "Internal SK Direksi strictly caps Direct Appointment at Rp 50M.",
                result: "Result: 100% Compliant",
            },
        },
        footer: "Build Your Custom Logic Engine.",
    },
    smart_drafting_modal: SmartDraftingModal {
        badge: "SMART DRAFTING",
        headline_start: "From Blank Page to\n",
        headline_highlight: "Board-Ready Draft",
        headline_end: " in Minutes.",
        subheadline: "Stop copy-pasting. Satya.AI's Smart Drafting engine constructs precise, legally binding agreements using structured logic and bilingual capabilities.",
        cta: "Start Generating",
        risk: Callout {
            badge: "The Risk Reality",
            title: "The \"Franken-Draft\" Risk",
            description: "Manually stitching together clauses from old contracts (\"Frankenstein drafts\") is the #1 cause of legal errors. It leads to conflicting definitions, forgotten names, and phantom references to laws that no longer exist.",
        },
        format: Item {
            title: "Format Inconsistency",
            desc: "Mixing fonts, numbering styles (1. vs I.), and indentations creates unprofessional, hard-to-read documents.",
        },
        zombie: Item {
            title: "Zombie Clauses",
            desc: "Accidentally keeping a \"Non-Compete\" clause from a 2018 employee contract in a 2024 vendor agreement.",
        },
        features_title: "Structured Legal Generation",
        features_subtitle: "Precision tools designed for legal professionals, not chat-bot prompters.",
        inputs: Item {
            title: "Structured Inputs",
            desc: "Form-based inputs for Parties, Scope, and Duration. No complex prompting required, just fill in the blanks.",
        },
        bilingual: Item {
            title: "Bilingual by Design",
            desc: "Seamlessly toggle between 'Indonesian Only' or 'English & Indonesian Side-by-Side' layouts instantly.",
        },
        template: Item {
            title: "Template Ingestion",
            desc: "Upload your firm's \"Golden Templates\". Satya learns your preferred clauses and style for future drafts.",
        },
        refinement: Item {
            title: "AI Refinement",
            desc: "Use natural language to refine clauses. \"Make the penalty mutual\" or \"Change jurisdiction to South Jakarta.\"",
        },
        refinement_visual: "\"Make penalty mutual\"",
        footer: ModalFooter {
            title: "Standardize Your Contracts.",
            subtitle: "Eliminate errors and draft 10x faster with Satya.",
            cta: "Start Generating",
        },
    },
    compliance_modal: ComplianceModal {
        badge: "DUAL-LAYER COMPLIANCE",
        headline_start: "Beyond Redlines: The\n",
        headline_highlight: "Dual-Layer Compliance Engine.",
        subheadline: "Generic AI treats every contract the same. Satya.AI applies a Dual-Layer Approach: separating rapid Normative Hygiene from deep Regulatory Verification.",
        cta: "Upload a Template",
        blind_spot: Callout {
            badge: "The Blind Spot in Drafting",
            title: "Confusing \"Clean\" with \"Compliant\"",
            description: "Legal teams waste 40% of their time fixing indentation, bolding definitions, and standardizing font sizes (\"Hygiene\"). While they focus on making the document look right, they miss the deep regulatory conflicts buried in the clauses.",
        },
        tiers_title: "Two Tiers of Intelligence",
        tiers_subtitle: "A specialized approach for every layer of your contract.",
        tier1: Tier {
            title: "Tier 1",
            subtitle: "Automated Normative Analysis",
            items: &[
                "Universal Hygiene: Automatically fixes numbering, indentation, and font consistency.",
                "Clarity Checks: Flags vague terms like \"reasonable efforts\" or \"promptly\".",
                "Dispute Mechanisms: Ensures standard arbitration clauses are present.",
            ],
        },
        tier2: Tier {
            title: "Tier 2",
            subtitle: "Regulatory Cross-Check",
            items: &[
                "Deep Verification: Cross-references clauses against specific National Laws (UU, PP).",
                "Environmental Audit: Checks compliance with AMDAL and environmental permits.",
                "Internal Policy Align: Validates against your specific Company Regulations (PP) and SOPs.",
            ],
        },
        fixer: Callout {
            badge: "INTELLIGENT TRANSFORM DRAFTING",
            title: "It's Not Just a Checker. It's a Fixer.",
            description: "Satya doesn't just list errors. It ingests your \"Golden Templates\" to understand your firm's perfect style. Then, it automatically rewrites incoming drafts to match your tone, structure, and formatting standards instantly.",
        },
        fixer_match: "MATCH 98%",
        footer: ModalFooter {
            title: "Standardize Your Safety.",
            subtitle: "Ensure every contract meets the Gold Standard.",
            cta: "Upload a Template",
        },
    },
    risk_modal: RiskModal {
        badge: "RISK MITIGATION ENGINE",
        headline: "The Gatekeeper. Your\nShield Against Tipikor.",
        subheadline: "An always-on sentry for your procurement process. Automatically detect high-risk violations, from Authority Limits to TKDN shortages, before the contract is signed.",
        cta: "Get the Scanner",
        problem: Callout {
            badge: "The Volume Problem",
            title: "One Missed Signature = Audit Finding",
            description: "In high-volume procurement, manual checks fail. Missing a single signature requirement or overlooking a TKDN calculation error can lead to severe Audit Findings (Temuan BPK) and legal exposure.",
        },
        authority_alert: "Authority Breach\nVP signing > Rp 5M",
        tkdn_alert: "TKDN Shortfall\nBelow mandated 40%",
        features_title: "The Killer Checks",
        features_subtitle: "Three critical layers of defense for every contract.",
        checks: &[
            Check {
                title: "Authority Limit Check",
                desc: "Instantly flags if a signer exceeds their authorized financial limit. Knows the difference between a VP's cap and a Director's mandate.",
                check: "Checks against SK Direksi",
            },
            Check {
                title: "TKDN Sentinel",
                desc: "Automatically parses Bills of Quantity (BoQ) to calculate Local Content percentages. Blocks contracts that fail to meet sector-specific thresholds.",
                check: "Enforces Permerin rules",
            },
            Check {
                title: "Payment Term Guard",
                desc: "Prevents risky financial terms like 100% upfront payments without bank guarantees. Ensures terms align with cash flow policies.",
                check: "Validates Termin Pembayaran",
            },
        ],
        footer: ModalFooter {
            title: "Secure Your Procurement Pipeline.",
            subtitle: "Eliminate Tipikor risks with Satya.",
            cta: "Get the Scanner",
        },
    },
    repository_modal: RepositoryModal {
        badge: "ACTIVE INTELLIGENCE ARCHIVE",
        headline: "Turn Your Archive into an\nActive Intelligence Asset.",
        subheadline: "Don't just store files. Interrogate them. Satya.AI automatically tags, extracts metadata, and monitors your documents for critical dates and obligations.",
        cta: "Connect Your Archive",
        problem: Callout {
            badge: "The Dead Data Graveyard",
            title: "Where Contracts Go to Die",
            description: "Most legal archives are just \"digital cemeteries\": unorganized folders of scanned PDFs. Without active monitoring, you miss critical renewal windows, lose track of Bank Guarantees, and let obligations slip through the cracks.",
        },
        features_title: "Active Metadata Extraction",
        features_subtitle: "Satya.AI wakes up your dormant data.",
        tagging: Item {
            title: "Auto-Tagging",
            desc: "Instantly identifies and tags key data points: Contract Values, Party Names, Jurisdictions, and Governing Laws.",
        },
        tags: &["#ServiceAgreement", "#IDR 500M"],
        expiry: Item {
            title: "Expiry Watch",
            desc: "Never miss a renewal. Automated alerts trigger at 90, 60, and 30 days before contract expiration.",
        },
        expiry_alert: "Next Alert: 30 Days",
        obligation: Item {
            title: "Obligation Tracking",
            desc: "Extracts and tracks specific deliverables, such as Performance Bond submissions or Quarterly Reports.",
        },
        obligation_task: "Performance Bond",
        obligation_status: "Due Tomorrow",
        footer: ModalFooter {
            title: "Wake Up Your Data.",
            subtitle: "Transform static files into dynamic insights.",
            cta: "Connect Your Archive",
        },
    },
    sovereignty: Sovereignty {
        title: "BUILT FOR",
        title_highlight: "SOVEREIGNTY.",
        saas: Item {
            title: "SaaS Deployment",
            desc: "Rapid deployment with standard enterprise-grade encryption. Ready for general counsel support.",
        },
        vpc: Item {
            title: "Private VPC",
            desc: "Zero-trust isolated networks (Azure/AWS/GCP) within Indonesian borders. Compliant with UU PDP.",
        },
    },
    footer: Footer {
        representation: "REPRESENTATION",
        redefined: "Redefined",
        legal_intelligence: "Legal Intelligence",
        privacy: "Privacy Protocol",
        terms: "Terms of Service",
        security: "Security Brief",
    },
    registration: Registration {
        badge: "Limited Availability Q4 2026",
        headline_start: "Join the ",
        headline_highlight: "Strategic Pilot Program",
        subheadline: "Experience the future of Indonesian legal compliance. We are currently accepting a limited number of enterprise partners for early access.",
        benefits: &[
            Item {
                title: "Zero-Risk Trial",
                desc: "Full access to all features with a dedicated sandbox environment.",
            },
            Item {
                title: "Custom Knowledge Graph",
                desc: "We map your specific internal regulations during onboarding.",
            },
            Item {
                title: "White-Glove Onboarding",
                desc: "Dedicated success manager and technical integration support.",
            },
        ],
        form: RegistrationForm {
            full_name: "Full Name",
            work_email: "Work Email",
            company_name: "Company Name",
            job_title: "Job Title",
            phone_number: "Phone Number (Optional)",
            upload_title: "Upload a Document for Demo",
            upload_desc: "We'll process this document in your private demo environment.",
            dropzone_text: "Click to upload or drag and drop",
            dropzone_subtext: "PDF, DOCX up to 10MB",
            submit: "Request Pilot Access",
            submitting: "Transmitting...",
            agreement: "By submitting, you agree to our Terms of Service and Privacy Policy.",
        },
        errors: FormErrors {
            required: "This field is required.",
            invalid_email: "Enter a valid work email address.",
            unsupported_file: "Only PDF and DOCX files are accepted.",
            file_too_large: "The file exceeds the 10MB limit.",
            too_many_files: "Attach a single document.",
            submit_failed: "We could not transmit your request.",
            retry: "Try Again",
        },
        success: Item {
            title: "Request Received",
            desc: "Your application for the Strategic Pilot Program has been securely transmitted. Our team will review your credentials and contact you within 24 hours.",
        },
        return_home: "Return Home",
    },
};
