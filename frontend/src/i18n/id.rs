use super::*;

pub static ID: Translations = Translations {
    navbar: Navbar {
        home: "Beranda",
        manifesto: "Modul Sistem",
        security: "Keamanan",
        request_protocol: "Minta Protokol",
        toggle_short: "EN",
        toggle_long: "Ganti ke EN",
    },
    hero: Hero {
        badge: "Kecerdasan Kognitif",
        title_part1: "DALAM HUKUM,",
        title_part2: "HALUSINASI",
        title_part3: "ADALAH LIABILITAS.",
        subtitle: "Dengan intelijen regulasi yurisprudensi berstandar pertahanan, Lexia menawarkan basis data dengan nol halusinasi.",
        cta: "Jadwalkan Protokol",
        dashboard: HeroDashboard {
            probabilistic_truth: "Kebenaran Probabilistik: 100.0%",
            zero_hallucinations: "NOL HALUSINASI",
            system_operational: "Sistem Beroperasi",
        },
    },
    problem: Problem {
        section_title: "MASALAH DENGAN",
        section_title_highlight: "AI GENERIK",
        description: "Model serbaguna seperti GPT-4 atau Claude dilatih pada web terbuka, bukan yurisprudensi Indonesia. Ketika diterapkan pada hukum korporasi berisiko tinggi, mereka gagal dalam tiga dimensi kritis.",
        error_label: "KESALAHAN FATAL",
        items: &[
            Item {
                title: "Minim Konteks",
                desc: "AI kurang pelatihan mengenai peraturan perundang-undangan Indonesia, putusan pengadilan, dan nuansa yurisprudensi spesifik yang diperlukan untuk pekerjaan hukum yang akurat.",
            },
            Item {
                title: "Risiko Data",
                desc: "Layanan AI publik menyimpan dan melatih data pengguna, menciptakan risiko besar bagi kerahasiaan klien dan pelanggaran hak istimewa.",
            },
            Item {
                title: "Keyakinan Keliru",
                desc: "LLM serbaguna menghalusinasikan kasus dan undang-undang yang tidak ada, menyampaikannya dengan keyakinan tinggi yang dapat menyebabkan liabilitas.",
            },
        ],
    },
    features: Features {
        title: "Modul",
        title_highlight: "Sistem",
        description: "Sistem operasi terpadu untuk kepatuhan hukum Indonesia.\nDibangun untuk presisi, kecepatan, dan kedaulatan mutlak.",
        status: "SEMUA SISTEM NOMINAL",
        tab_modules: "MODUL PLATFORM",
        tab_security: "PERIMETER KEAMANAN",
        cards: FeatureCards {
            discovery: DiscoveryCard {
                title: "Mesin Penemuan",
                desc: "Pencarian neural terpadu di seluruh dokumen internal dan peraturan nasional (OJK, BI, MA). Retrieval augmented generation sadar konteks yang disesuaikan untuk hukum Indonesia.",
                module: "Modul 01",
                scanning: "Memindai Basis Data Regulasi...",
            },
            harmonization: HarmonizationCard {
                title: "Harmonisasi",
                desc: "Pemeriksaan konflik otomatis terhadap 12.000+ undang-undang.",
                stats: &[
                    Stat { label: "Cek Konflik", value: "85%" },
                    Stat { label: "Pencocokan Yurisprudensi", value: "60%" },
                ],
            },
            drafting: Item {
                title: "Perancangan Cerdas",
                desc: "Pembuatan kontrak berbantuan AI dengan pustaka klausa.",
            },
            risk: RiskCard {
                title: "Pemindai Risiko",
                desc: "Analisis liabilitas waktu nyata.",
                metric: "Tingkat Akurasi",
            },
            compliance: Item {
                title: "Kepatuhan",
                desc: "Laporan analisis kesenjangan instan.",
            },
            repository: RepositoryCard {
                title: "Repositori",
                desc: "Brankas terpusat yang aman.",
                encrypted: "TERENKRIPSI",
                secure: "AMAN",
            },
        },
    },
    security_perimeter: SecurityPerimeter {
        title: "Perimeter Keamanan Google Cloud",
        subtitle: "Dibangun di atas 4 Pilar Keamanan Cloud Berstandar Pemerintah",
        pillars: &[
            Pillar {
                code: "CMEK",
                desc: "Kunci enkripsi dikelola oleh Perusahaan, bukan oleh Google. Kendali penuh atas penghancuran kriptografis.",
            },
            Pillar {
                code: "DRZ",
                desc: "Zona Residensi Data. Penyimpanan dan pemrosesan dikunci ketat di Jakarta. Tanpa distribusi data.",
            },
            Pillar {
                code: "AxT",
                desc: "Assured Workloads. Patuh terhadap regulasi keuangan dan pemerintahan Indonesia.",
            },
            Pillar {
                code: "VPC-SC",
                desc: "VPC Service Controls. Menetapkan perimeter keamanan di sekitar sumber daya Google Cloud untuk mencegah eksfiltrasi data.",
            },
        ],
        flow: SecurityFlow {
            title: "Alur Informasi Aman",
            user: "Pengguna",
            steps: &[
                FlowStep { label: "WAF & Autentikasi", sublabel: "IAP + Perlindungan DDoS" },
                FlowStep { label: "Pemindai SDP", sublabel: "PII & Data Sensitif" },
                FlowStep { label: "Filter Keamanan", sublabel: "Validasi Konteks" },
            ],
            model: "Gemini LLM",
        },
    },
    discovery_modal: DiscoveryModal {
        badge: "PENEMUAN PENGETAHUAN HUKUM",
        headline_start: "Jangan Hanya Cari Kata Kunci.\n",
        headline_highlight: "Temukan Jawaban.",
        subheadline: "Ubah arsip statis Anda menjadi Kecerdasan Hidup. Pencarian semantik mendalam di seluruh dokumen warisan internal Anda.",
        features_title: "Kemampuan Intelijen Hibrida",
        library: Item {
            title: "Perpustakaan Internal Hidup",
            desc: "OCR Perusahaan menyerap akta yang dipindai dan PDF yang berantakan.",
        },
        vectorization: Item {
            title: "Vektorisasi Semantik",
            desc: "Menemukan konsep, bukan hanya kata-kata. Menjembatani kesenjangan bahasa.",
        },
        bridge: Item {
            title: "Jembatan Eksternal",
            desc: "Grounding Pencarian Google yang aman untuk putusan pengadilan terbaru.",
        },
        cta: "Minta Demo",
        static_archive: StaticArchive {
            title: "Perangkap Arsip Statis",
            subtitle: "Mengapa manajemen dokumen tradisional gagal bagi tim hukum modern.",
            card1: Item {
                title: "Kuburan Internal",
                desc: "Drive bersama penuh dengan PDF yang tidak dapat dicari. Anda kehilangan data warisan penting karena terkubur dalam gambar pindaian dan file dengan nama yang buruk.",
            },
            card2: Item {
                title: "\"Wild West\" Eksternal",
                desc: "Mencari peraturan secara panik di Google, mempertaruhkan ketergantungan pada blog yang tidak terverifikasi, artikel usang, dan chatbot AI yang berhalusinasi.",
            },
        },
        footer: "Jangan biarkan data Anda berdebu.",
    },
    harmonization_modal: HarmonizationModal {
        badge: "HARMONISASI REGULASI",
        headline_start: "Aturan Anda. Hirarki Anda.\n",
        headline_highlight: "Satu Sumber Kebenaran.",
        subheadline: "AI generik berhenti pada hukum nasional. Lexia menyesuaikan mesin logika untuk memasukkan Peraturan internal spesifik Anda, menciptakan perisai kepatuhan terpadu.",
        cta: "Jadwalkan Workshop",
        logic_stack: LogicStack {
            title: "Tumpukan Logika yang Dapat Disesuaikan",
            subtitle: "Menggabungkan hukum publik dengan tata kelola perusahaan pribadi Anda secara mulus.",
            public_shield: Shield {
                title: "Perisai Publik",
                tag: "TETAP",
                items: &["Undang-Undang Dasar (UUD 1945)", "Undang-Undang (UU)", "Peraturan Pemerintah (PP)"],
            },
            corporate_shield: Shield {
                title: "Perisai Perusahaan",
                tag: "KHUSUS",
                items: &["Anggaran Dasar", "SK Direksi", "SOP Operasional"],
            },
            protocol_prefix: "Protokol Lexia: Jika Peraturan Internal lebih ketat dari Hukum Nasional, Lexia menegakkan aturan ",
            protocol_highlight: "ANDA",
            protocol_suffix: " secara otomatis.",
        },
        comparison: Comparison {
            badge: "Titik Buta Internal",
            title: "Mengapa AI Generik Gagal dalam Kepatuhan Perusahaan",
            scenario: "SKENARIO",
            scenario_title: "\"Proyek Pengadaan senilai Rp 150 Juta\"",
            generic: Verdict {
                title: "AI Generik",
                status: "Disetujui",
                description: "Hukum Nasional (Perpres Pengadaan) mengizinkan Penunjukan Langsung untuk proyek di bawah Rp 200 Juta.",
                result: "Hasil: Pelanggaran Kepatuhan",
            },
            lexia: Verdict {
                title: "Lexia",
                status: "DIBLOKIR",
                description: "SK Direksi Internal secara ketat membatasi Penunjukan Langsung pada Rp 50 Juta.",
                result: "Hasil: 100% Patuh",
            },
        },
        footer: "Bangun Mesin Logika Kustom Anda.",
    },
    smart_drafting_modal: SmartDraftingModal {
        badge: "PERANCANGAN CERDAS",
        headline_start: "Dari Halaman Kosong ke\n",
        headline_highlight: "Draf Siap Rapat Direksi",
        headline_end: " dalam Hitungan Menit.",
        subheadline: "Berhenti salin-tempel. Mesin Perancangan Cerdas Satya.AI menyusun perjanjian yang tepat dan mengikat secara hukum menggunakan logika terstruktur dan kemampuan dwibahasa.",
        cta: "Mulai Membuat",
        risk: Callout {
            badge: "Realitas Risiko",
            title: "Risiko \"Draf Frankenstein\"",
            description: "Menjahit klausa secara manual dari kontrak lama (\"draf Frankenstein\") adalah penyebab utama kesalahan hukum. Ini mengarah pada definisi yang bertentangan, nama yang terlupakan, dan referensi hantu ke undang-undang yang tidak lagi berlaku.",
        },
        format: Item {
            title: "Inkonsistensi Format",
            desc: "Mencampur font, gaya penomoran (1. vs I.), dan indentasi membuat dokumen tidak profesional dan sulit dibaca.",
        },
        zombie: Item {
            title: "Klausa Zombie",
            desc: "Secara tidak sengaja menyimpan klausa \"Non-Compete\" dari kontrak karyawan 2018 dalam perjanjian vendor 2024.",
        },
        features_title: "Generasi Hukum Terstruktur",
        features_subtitle: "Alat presisi yang dirancang untuk profesional hukum, bukan pembisik chatbot.",
        inputs: Item {
            title: "Input Terstruktur",
            desc: "Input berbasis formulir untuk Pihak, Ruang Lingkup, dan Durasi. Tidak perlu prompting rumit, cukup isi bagian yang kosong.",
        },
        bilingual: Item {
            title: "Desain Dwibahasa",
            desc: "Beralih dengan mulus antara tata letak 'Hanya Indonesia' atau 'Inggris & Indonesia Berdampingan' secara instan.",
        },
        template: Item {
            title: "Penyerapan Templat",
            desc: "Unggah \"Templat Emas\" perusahaan Anda. Satya mempelajari klausa dan gaya pilihan Anda untuk draf masa depan.",
        },
        refinement: Item {
            title: "Penyempurnaan AI",
            desc: "Gunakan bahasa alami untuk menyempurnakan klausa. \"Buat penalti menjadi timbal balik\" atau \"Ubah yurisdiksi menjadi Jakarta Selatan.\"",
        },
        refinement_visual: "\"Buat penalti menjadi timbal balik\"",
        footer: ModalFooter {
            title: "Standarisasi Kontrak Anda.",
            subtitle: "Hilangkan kesalahan dan buat draf 10x lebih cepat dengan Satya.",
            cta: "Mulai Membuat",
        },
    },
    compliance_modal: ComplianceModal {
        badge: "KEPATUHAN LAPIS GANDA",
        headline_start: "Di Luar Coretan: Mesin\n",
        headline_highlight: "Kepatuhan Lapis Ganda.",
        subheadline: "AI generik memperlakukan setiap kontrak sama. Satya.AI menerapkan Pendekatan Lapis Ganda: memisahkan Kerapian Normatif cepat dari Verifikasi Regulasi mendalam.",
        cta: "Unggah Templat",
        blind_spot: Callout {
            badge: "Titik Buta dalam Perancangan",
            title: "Mencampuradukkan \"Bersih\" dengan \"Patuh\"",
            description: "Tim hukum membuang 40% waktu mereka memperbaiki indentasi, menebalkan definisi, dan menstandarisasi ukuran font (\"Kerapian\"). Sementara mereka fokus membuat dokumen terlihat benar, mereka melewatkan konflik regulasi mendalam yang terkubur dalam klausa.",
        },
        tiers_title: "Dua Tingkat Kecerdasan",
        tiers_subtitle: "Pendekatan khusus untuk setiap lapisan kontrak Anda.",
        tier1: Tier {
            title: "Tingkat 1",
            subtitle: "Analisis Normatif Otomatis",
            items: &[
                "Kerapian Universal: Secara otomatis memperbaiki penomoran, indentasi, dan konsistensi font.",
                "Pemeriksaan Kejelasan: Menandai istilah samar seperti \"usaha wajar\" atau \"segera\".",
                "Mekanisme Sengketa: Memastikan klausa arbitrase standar ada.",
            ],
        },
        tier2: Tier {
            title: "Tingkat 2",
            subtitle: "Pemeriksaan Silang Regulasi",
            items: &[
                "Verifikasi Mendalam: Referensi silang klausa terhadap Hukum Nasional tertentu (UU, PP).",
                "Audit Lingkungan: Memeriksa kepatuhan dengan AMDAL dan izin lingkungan.",
                "Penyelarasan Kebijakan Internal: Memvalidasi terhadap Peraturan Perusahaan (PP) dan SOP spesifik Anda.",
            ],
        },
        fixer: Callout {
            badge: "PENYUSUNAN TRANSFORMASI CERDAS",
            title: "Bukan Sekadar Pemeriksa. Ini Perbaikan.",
            description: "Satya tidak hanya mencantumkan kesalahan. Ia menyerap \"Templat Emas\" Anda untuk memahami gaya sempurna firma Anda. Kemudian, secara otomatis menulis ulang draf masuk agar sesuai dengan nada, struktur, dan standar pemformatan Anda secara instan.",
        },
        fixer_match: "COCOK 98%",
        footer: ModalFooter {
            title: "Standarisasi Keamanan Anda.",
            subtitle: "Pastikan setiap kontrak memenuhi Standar Emas.",
            cta: "Unggah Templat",
        },
    },
    risk_modal: RiskModal {
        badge: "MESIN MITIGASI RISIKO",
        headline: "Sang Penjaga. Perisai Anda\nMelawan Tipikor.",
        subheadline: "Penjaga yang selalu aktif untuk proses pengadaan Anda. Secara otomatis mendeteksi pelanggaran berisiko tinggi, dari Batas Wewenang hingga kekurangan TKDN, sebelum kontrak ditandatangani.",
        cta: "Dapatkan Pemindai",
        problem: Callout {
            badge: "Masalah Volume",
            title: "Satu Tanda Tangan Terlewat = Temuan Audit",
            description: "Dalam pengadaan volume tinggi, pemeriksaan manual gagal. Kehilangan satu persyaratan tanda tangan atau mengabaikan kesalahan perhitungan TKDN dapat menyebabkan Temuan Audit (Temuan BPK) yang parah dan paparan hukum.",
        },
        authority_alert: "Pelanggaran Wewenang\nVP menandatangani > Rp 5M",
        tkdn_alert: "Kekurangan TKDN\nDi bawah mandat 40%",
        features_title: "Pemeriksaan Krusial",
        features_subtitle: "Tiga lapisan pertahanan kritis untuk setiap kontrak.",
        checks: &[
            Check {
                title: "Cek Batas Wewenang",
                desc: "Menandai secara instan jika penandatangan melebihi batas keuangan resmi mereka. Mengetahui perbedaan antara batas VP dan mandat Direktur.",
                check: "Memeriksa terhadap SK Direksi",
            },
            Check {
                title: "Sentinel TKDN",
                desc: "Secara otomatis mengurai Bill of Quantity (BoQ) untuk menghitung persentase Tingkat Komponen Dalam Negeri. Memblokir kontrak yang gagal memenuhi ambang batas spesifik sektor.",
                check: "Menegakkan aturan Permerin",
            },
            Check {
                title: "Penjaga Termin Pembayaran",
                desc: "Mencegah persyaratan keuangan berisiko seperti pembayaran di muka 100% tanpa jaminan bank. Memastikan persyaratan selaras dengan kebijakan arus kas.",
                check: "Memvalidasi Termin Pembayaran",
            },
        ],
        footer: ModalFooter {
            title: "Amankan Saluran Pengadaan Anda.",
            subtitle: "Hilangkan risiko Tipikor dengan Satya.",
            cta: "Dapatkan Pemindai",
        },
    },
    repository_modal: RepositoryModal {
        badge: "ARSIP INTELIJEN AKTIF",
        headline: "Ubah Arsip Anda Menjadi\nAset Intelijen Aktif.",
        subheadline: "Jangan hanya menyimpan file. Interogasi mereka. Satya.AI secara otomatis menandai, mengekstrak metadata, dan memantau dokumen Anda untuk tanggal dan kewajiban penting.",
        cta: "Hubungkan Arsip Anda",
        problem: Callout {
            badge: "Kuburan Data Mati",
            title: "Tempat Kontrak Pergi untuk Mati",
            description: "Sebagian besar arsip hukum hanyalah \"kuburan digital\": folder PDF pindaian yang tidak terorganisir. Tanpa pemantauan aktif, Anda melewatkan jendela pembaruan penting, kehilangan jejak Jaminan Bank, dan membiarkan kewajiban lolos dari celah.",
        },
        features_title: "Ekstraksi Metadata Aktif",
        features_subtitle: "Satya.AI membangunkan data tidur Anda.",
        tagging: Item {
            title: "Penandaan Otomatis",
            desc: "Secara instan mengidentifikasi dan menandai titik data utama: Nilai Kontrak, Nama Pihak, Yurisdiksi, dan Hukum yang Mengatur.",
        },
        tags: &["#PerjanjianLayanan", "#IDR 500Jt"],
        expiry: Item {
            title: "Pengawas Kedaluwarsa",
            desc: "Jangan pernah melewatkan pembaruan. Peringatan otomatis memicu pada 90, 60, dan 30 hari sebelum kedaluwarsa kontrak.",
        },
        expiry_alert: "Peringatan Berikutnya: 30 Hari",
        obligation: Item {
            title: "Pelacakan Kewajiban",
            desc: "Mengekstrak dan melacak kiriman tertentu, seperti penyerahan Jaminan Pelaksanaan atau Laporan Triwulanan.",
        },
        obligation_task: "Jaminan Pelaksanaan",
        obligation_status: "Jatuh Tempo Besok",
        footer: ModalFooter {
            title: "Bangunkan Data Anda.",
            subtitle: "Ubah file statis menjadi wawasan dinamis.",
            cta: "Hubungkan Arsip Anda",
        },
    },
    sovereignty: Sovereignty {
        title: "DIBANGUN UNTUK",
        title_highlight: "KEDAULATAN.",
        saas: Item {
            title: "Penyebaran SaaS",
            desc: "Penyebaran cepat dengan enkripsi tingkat perusahaan standar. Siap untuk dukungan penasihat umum.",
        },
        vpc: Item {
            title: "VPC Pribadi",
            desc: "Jaringan terisolasi tanpa kepercayaan (Azure/AWS/GCP) di dalam perbatasan Indonesia. Patuh dengan UU PDP.",
        },
    },
    footer: Footer {
        representation: "REPRESENTASI",
        redefined: "Didefinisikan Ulang",
        legal_intelligence: "Intelijen Hukum",
        privacy: "Protokol Privasi",
        terms: "Syarat Layanan",
        security: "Singkat Keamanan",
    },
    registration: Registration {
        badge: "Ketersediaan Terbatas Q4 2026",
        headline_start: "Bergabung dengan ",
        headline_highlight: "Program Percontohan Strategis",
        subheadline: "Rasakan masa depan kepatuhan hukum Indonesia. Saat ini kami menerima mitra perusahaan dalam jumlah terbatas untuk akses awal.",
        benefits: &[
            Item {
                title: "Uji Coba Nol Risiko",
                desc: "Akses penuh ke semua fitur dengan lingkungan sandbox khusus.",
            },
            Item {
                title: "Grafik Pengetahuan Kustom",
                desc: "Kami memetakan peraturan internal spesifik Anda selama orientasi.",
            },
            Item {
                title: "Orientasi Layanan Penuh",
                desc: "Manajer sukses khusus dan dukungan integrasi teknis.",
            },
        ],
        form: RegistrationForm {
            full_name: "Nama Lengkap",
            work_email: "Email Kantor",
            company_name: "Nama Perusahaan",
            job_title: "Jabatan",
            phone_number: "Nomor Telepon (Opsional)",
            upload_title: "Unggah Dokumen untuk Demo",
            upload_desc: "Kami akan memproses dokumen ini di lingkungan demo pribadi Anda.",
            dropzone_text: "Klik untuk mengunggah atau seret dan lepas",
            dropzone_subtext: "PDF, DOCX hingga 10MB",
            submit: "Minta Akses Pilot",
            submitting: "Mengirim...",
            agreement: "Dengan mengirimkan, Anda menyetujui Ketentuan Layanan dan Kebijakan Privasi kami.",
        },
        errors: FormErrors {
            required: "Kolom ini wajib diisi.",
            invalid_email: "Masukkan alamat email kantor yang valid.",
            unsupported_file: "Hanya file PDF dan DOCX yang diterima.",
            file_too_large: "Ukuran file melebihi batas 10MB.",
            too_many_files: "Lampirkan satu dokumen saja.",
            submit_failed: "Permintaan Anda gagal dikirim.",
            retry: "Coba Lagi",
        },
        success: Item {
            title: "Permintaan Diterima",
            desc: "Aplikasi Anda untuk Program Percontohan Strategis telah dikirim dengan aman. Tim kami akan meninjau kredensial Anda dan menghubungi Anda dalam 24 jam.",
        },
        return_home: "Kembali ke Beranda",
    },
};
