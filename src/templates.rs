//! The closed template catalogue.
//!
//! A [`Template`] bundles the file extensions, ignore patterns, trigger
//! filenames, and package-manifest dependency names that identify one
//! technology. The catalogue is plain static data: loaded once, never
//! mutated, matched by string identifier. Many templates are typically
//! active at the same time (e.g. `react` + `typescript` + `html-css`).

/// One recognizable technology/framework.
#[derive(Debug, Clone, Copy)]
pub struct Template {
    /// Stable string identifier.
    pub id: &'static str,
    /// Human-readable display name.
    pub name: &'static str,
    /// Recognized file extensions, lowercase with leading dot.
    pub extensions: &'static [&'static str],
    /// Ignore patterns (gitignore-style) contributed while active.
    pub ignores: &'static [&'static str],
    /// Root filenames (or `*suffix` globs) whose presence suggests this
    /// template.
    pub triggers: &'static [&'static str],
    /// Dependency names in `package.json`/`composer.json` that strongly imply
    /// this template.
    pub package_match: &'static [&'static str],
}

/// Returns the template with the given identifier, if it exists.
pub fn find(id: &str) -> Option<&'static Template> {
    TEMPLATES.iter().find(|t| t.id == id)
}

/// Resolves a list of identifiers to catalogue entries, silently dropping
/// unknown ids.
pub fn resolve_active(ids: &[String]) -> Vec<&'static Template> {
    ids.iter()
        .filter_map(|id| {
            let tmpl = find(id);
            if tmpl.is_none() {
                log::warn!("Unknown template id '{}' ignored", id);
            }
            tmpl
        })
        .collect()
}

/// The full catalogue, in detection-priority order.
pub static TEMPLATES: &[Template] = &[
    Template {
        id: "typescript",
        name: "TypeScript",
        extensions: &[".ts", ".tsx", ".d.ts", ".mts", ".cts"],
        ignores: &[
            "*.tsbuildinfo",
            "dist/",
            "build/",
            ".tsc/",
            "out/",
            "package-lock.json",
            "yarn.lock",
            "pnpm-lock.yaml",
            "bun.lockb",
        ],
        triggers: &["tsconfig.json", "package.json"],
        package_match: &[],
    },
    Template {
        id: "javascript",
        name: "JavaScript",
        extensions: &[".js", ".cjs", ".mjs", ".jsx", ".jsm", ".jsonc"],
        ignores: &[
            "node_modules/",
            "npm-debug.log*",
            "yarn-debug.log*",
            "yarn-error.log*",
            "package-lock.json",
            "yarn.lock",
            "pnpm-lock.yaml",
            ".env",
            ".env.local",
            "dist/",
            "build/",
        ],
        triggers: &["package.json", ".npmrc"],
        package_match: &[],
    },
    Template {
        id: "python",
        name: "Python",
        extensions: &[".py", ".pyw", ".pyi", ".pyx"],
        ignores: &[
            "__pycache__/",
            "*.pyc",
            "*.egg-info/",
            "*.egg",
            "env/",
            "venv/",
            ".venv",
            "build/",
            "dist/",
            "wheels/",
            ".pytest_cache/",
            ".coverage",
            "pip-log.txt",
        ],
        triggers: &["requirements.txt", "setup.py", "pyproject.toml"],
        package_match: &[],
    },
    Template {
        id: "html-css",
        name: "HTML/CSS",
        extensions: &[
            ".html", ".htm", ".xhtml", ".css", ".scss", ".sass", ".less", ".postcss",
        ],
        ignores: &[
            ".cache/",
            ".parcel-cache/",
            "*.css.map",
            "*.sass.map",
            "*.scss.map",
            "dist/",
        ],
        triggers: &["index.html", "style.css"],
        package_match: &[],
    },
    Template {
        id: "sql",
        name: "SQL",
        extensions: &[".sql", ".psql", ".hql", ".ddl", ".dml"],
        ignores: &["*.db", "*.sqlite", "*.sqlite3", "*.mdb", "*.sqlitedb"],
        triggers: &["schema.sql", "migrations/"],
        package_match: &[],
    },
    Template {
        id: "java",
        name: "Java",
        extensions: &[".java", ".gradle"],
        ignores: &[
            "target/",
            "*.class",
            "*.jar",
            "*.war",
            "*.ear",
            ".gradle/",
            "build/",
            ".idea/",
            "*.iml",
            "out/",
            "*.log",
        ],
        triggers: &["pom.xml", "build.gradle"],
        package_match: &[],
    },
    Template {
        id: "kotlin",
        name: "Kotlin",
        extensions: &[".kt", ".kts", ".ktm", ".gradle"],
        ignores: &["*.class", "build/", ".idea/", "*.iml", "out/", ".gradle/"],
        triggers: &["build.gradle.kts", "pom.xml"],
        package_match: &[],
    },
    Template {
        id: "csharp",
        name: "C#",
        extensions: &[".cs", ".csproj", ".sln", ".cshtml", ".csx", ".razor"],
        ignores: &[
            "bin/",
            "obj/",
            "*.suo",
            "*.user",
            ".vs/",
            ".vscode/",
            "packages/",
            "*.nupkg",
            "project.lock.json",
        ],
        triggers: &["*.csproj", "*.sln"],
        package_match: &[],
    },
    Template {
        id: "cpp",
        name: "C++",
        extensions: &[
            ".cpp", ".cc", ".cxx", ".h", ".hpp", ".hh", ".hxx", ".inl", ".ipp",
        ],
        ignores: &["*.o", "*.obj", "*.a", "*.out", "cmake-build-*/", "CMakeCache.txt"],
        triggers: &["CMakeLists.txt", "*.cpp"],
        package_match: &[],
    },
    Template {
        id: "c",
        name: "C",
        extensions: &[".c", ".h"],
        ignores: &["*.o", "*.obj", "*.a", "*.exe", "*.out", "*.so", "*.dylib"],
        triggers: &["Makefile", "*.h"],
        package_match: &[],
    },
    Template {
        id: "go",
        name: "Go",
        extensions: &[".go", ".mod", ".sum"],
        ignores: &["*.exe", "*.dll", "*.so", "*.dylib", "vendor/", "*.test", "dist/", "bin/"],
        triggers: &["go.mod", "go.sum"],
        package_match: &[],
    },
    Template {
        id: "rust",
        name: "Rust",
        extensions: &[".rs"],
        ignores: &["target/", "Cargo.lock", "*.pdb", "dist/", "*.swp"],
        triggers: &["Cargo.toml", "Cargo.lock"],
        package_match: &[],
    },
    Template {
        id: "php",
        name: "PHP",
        extensions: &[".php", ".phtml", ".phar"],
        ignores: &[
            "/vendor/",
            "composer.lock",
            ".env",
            ".phpunit.result.cache",
            "node_modules/",
        ],
        triggers: &["composer.json", "composer.lock"],
        package_match: &[],
    },
    Template {
        id: "ruby",
        name: "Ruby",
        extensions: &[".rb", ".rbw", ".rake", ".gemspec", ".erb"],
        ignores: &[
            "*.gem",
            ".bundle",
            "vendor/bundle",
            "Gemfile.lock",
            ".byebug_history",
            "tmp/",
        ],
        triggers: &["Gemfile", "Gemfile.lock"],
        package_match: &[],
    },
    Template {
        id: "swift",
        name: "Swift",
        extensions: &[".swift"],
        ignores: &["xcuserdata/", "*.xcuserstate", "build/", "*.ipa", ".build/", ".swiftpm/"],
        triggers: &["Package.swift", "*.xcodeproj"],
        package_match: &[],
    },
    Template {
        id: "dart",
        name: "Dart",
        extensions: &[".dart"],
        ignores: &[".dart_tool/", ".packages", "build/", "*.g.dart"],
        triggers: &["pubspec.yaml"],
        package_match: &[],
    },
    Template {
        id: "bash-shell",
        name: "Bash/Shell",
        extensions: &[".sh", ".bash", ".zsh", ".fish", ".ksh"],
        ignores: &["*.swp", "*.swo", "*~", ".bash_history", ".zsh_history"],
        triggers: &["*.sh"],
        package_match: &[],
    },
    Template {
        id: "scala",
        name: "Scala",
        extensions: &[".scala", ".sc", ".sbt"],
        ignores: &["target/", ".idea/", "*.class", "*.jar"],
        triggers: &["build.sbt", "project/"],
        package_match: &[],
    },
    Template {
        id: "perl",
        name: "Perl",
        extensions: &[".pl", ".pm", ".t", ".pod", ".cgi"],
        ignores: &["*.perlcritic", "cover_db/", "*.o", "blib/"],
        triggers: &["Makefile.PL", "cpanfile"],
        package_match: &[],
    },
    Template {
        id: "r",
        name: "R",
        extensions: &[".r", ".rmd", ".rdata", ".rds", ".rproj"],
        ignores: &[".Rhistory", ".RData", ".Ruserdata", ".Rproj.user/"],
        triggers: &["*.Rproj", "DESCRIPTION"],
        package_match: &[],
    },
    Template {
        id: "elixir",
        name: "Elixir",
        extensions: &[".ex", ".exs", ".eex", ".leex"],
        ignores: &[
            "_build/",
            "deps/",
            ".fetch",
            "erl_crash.dump",
            "*.ez",
            "*.beam",
        ],
        triggers: &["mix.exs", "mix.lock"],
        package_match: &[],
    },
    Template {
        id: "lua",
        name: "Lua",
        extensions: &[".lua", ".luac", ".lua5.1", ".rockspec"],
        ignores: &["*.luac", "luac.out"],
        triggers: &["*.rockspec"],
        package_match: &[],
    },
    Template {
        id: "assembly",
        name: "Assembly",
        extensions: &[".asm", ".s", ".nasm", ".a51", ".inc"],
        ignores: &["*.o", "*.obj", "*.exe", "*.bin", "*.hex"],
        triggers: &["Makefile"],
        package_match: &[],
    },
    Template {
        id: "groovy",
        name: "Groovy",
        extensions: &[".groovy", ".gvy", ".gy", ".gsh", ".gradle"],
        ignores: &["*.class", "build/", ".gradle/"],
        triggers: &["build.gradle", "Jenkinsfile"],
        package_match: &[],
    },
    Template {
        id: "vb-net",
        name: "Visual Basic .NET",
        extensions: &[".vb", ".vba", ".vbs", ".frm", ".cls"],
        ignores: &["bin/", "obj/", "*.suo", "*.user"],
        triggers: &["*.vbproj", "*.sln"],
        package_match: &[],
    },
    Template {
        id: "react",
        name: "React",
        extensions: &[".js", ".jsx", ".ts", ".tsx"],
        ignores: &[
            "node_modules/",
            "build/",
            "dist/",
            ".env",
            ".env.local",
            "npm-debug.log*",
            "yarn-debug.log*",
            "coverage/",
            ".eslintcache",
        ],
        triggers: &["package.json", "*.jsx", "*.tsx"],
        package_match: &["react", "react-dom", "react-scripts"],
    },
    Template {
        id: "nextjs",
        name: "Next.js",
        extensions: &[".js", ".jsx", ".ts", ".tsx"],
        ignores: &[
            ".next/",
            "out/",
            "build/",
            "dist/",
            ".vercel",
            "*.tsbuildinfo",
            "node_modules/",
        ],
        triggers: &[
            "next.config.js",
            "next.config.mjs",
            "next.config.ts",
            "package.json",
        ],
        package_match: &["next"],
    },
    Template {
        id: "vuejs",
        name: "Vue.js",
        extensions: &[".js", ".jsx", ".ts", ".tsx", ".vue"],
        ignores: &[
            "node_modules/",
            "/dist",
            "/build",
            ".env",
            ".env.local",
            "npm-debug.log*",
            ".eslintcache",
        ],
        triggers: &["package.json", "*.vue"],
        package_match: &["vue"],
    },
    Template {
        id: "nuxtjs",
        name: "Nuxt.js",
        extensions: &[".js", ".jsx", ".ts", ".tsx", ".vue"],
        ignores: &[
            ".nuxt/",
            "dist/",
            "node_modules/",
            ".env",
            ".env.local",
            ".output/",
        ],
        triggers: &["nuxt.config.ts", "package.json"],
        package_match: &["nuxt"],
    },
    Template {
        id: "sveltekit",
        name: "SvelteKit",
        extensions: &[".js", ".ts", ".svelte"],
        ignores: &[
            ".svelte-kit/",
            "build/",
            "dist/",
            "node_modules/",
            ".env",
            ".env.local",
            ".vercel",
        ],
        triggers: &["svelte.config.js", "package.json"],
        package_match: &["@sveltejs/kit", "svelte"],
    },
    Template {
        id: "angular",
        name: "Angular",
        extensions: &[".ts", ".tsx", ".html", ".css"],
        ignores: &[
            "dist/",
            ".angular/",
            "node_modules/",
            ".vscode/",
            ".idea/",
            "*.swp",
        ],
        triggers: &["angular.json", "package.json"],
        package_match: &["@angular/core"],
    },
    Template {
        id: "expressjs",
        name: "Express.js",
        extensions: &[".js", ".ts"],
        ignores: &[
            "node_modules/",
            "npm-debug.log*",
            ".env",
            ".env.local",
            "dist/",
            "build/",
        ],
        triggers: &["package.json", "server.js", "index.js"],
        package_match: &["express"],
    },
    Template {
        id: "remix",
        name: "Remix",
        extensions: &[".js", ".jsx", ".ts", ".tsx"],
        ignores: &[
            "build/",
            "dist/",
            ".remix",
            "node_modules/",
            "npm-debug.log*",
            ".env",
            ".env.local",
            ".vercel",
        ],
        triggers: &["remix.config.js", "package.json"],
        package_match: &["@remix-run/react", "@remix-run/node"],
    },
    Template {
        id: "astro",
        name: "Astro",
        extensions: &[".js", ".ts", ".astro"],
        ignores: &[
            "dist/",
            ".astro/",
            "node_modules/",
            "npm-debug.log*",
            ".env",
            ".env.local",
            ".vercel",
        ],
        triggers: &["astro.config.mjs", "package.json"],
        package_match: &["astro"],
    },
    Template {
        id: "qwik",
        name: "Qwik",
        extensions: &[".js", ".ts", ".jsx", ".tsx"],
        ignores: &[
            "dist/",
            ".qwik/",
            "node_modules/",
            "npm-debug.log*",
            ".env",
            ".env.local",
            ".vercel",
        ],
        triggers: &["qwik.config.ts", "package.json"],
        package_match: &["@builder.io/qwik"],
    },
    Template {
        id: "solidjs",
        name: "SolidJS",
        extensions: &[".js", ".ts", ".jsx", ".tsx"],
        ignores: &[
            "dist/",
            ".solid/",
            "node_modules/",
            "npm-debug.log*",
            ".env",
            ".env.local",
            "coverage/",
        ],
        triggers: &["vite.config.ts", "package.json"],
        package_match: &["solid-js"],
    },
    Template {
        id: "nestjs",
        name: "NestJS",
        extensions: &[".ts"],
        ignores: &[
            "dist/",
            "node_modules/",
            "npm-debug.log*",
            ".env",
            ".env.local",
            ".vercel",
            "coverage/",
            ".nyc_output/",
        ],
        triggers: &["package.json", "src/main.ts"],
        package_match: &["@nestjs/core", "@nestjs/common"],
    },
    Template {
        id: "fastify",
        name: "Fastify",
        extensions: &[".js", ".ts"],
        ignores: &[
            "dist/",
            "node_modules/",
            "npm-debug.log*",
            ".env",
            ".env.local",
            "coverage/",
            ".nyc_output/",
        ],
        triggers: &["package.json", "server.js"],
        package_match: &["fastify"],
    },
    Template {
        id: "koa",
        name: "Koa",
        extensions: &[".js", ".ts"],
        ignores: &[
            "dist/",
            "node_modules/",
            "npm-debug.log*",
            ".env",
            ".env.local",
            "coverage/",
        ],
        triggers: &["package.json", "index.js"],
        package_match: &["koa"],
    },
    Template {
        id: "meteorjs",
        name: "Meteor.js",
        extensions: &[".js", ".jsx", ".ts", ".tsx"],
        ignores: &[
            "node_modules/",
            ".meteor/local/",
            ".meteor/dev_bundle/",
            "npm-debug.log*",
            ".env",
            ".env.local",
            "dist/",
        ],
        triggers: &["package.json", ".meteor/"],
        package_match: &["meteor-node-stubs"],
    },
    Template {
        id: "spring-boot",
        name: "Spring Boot",
        extensions: &[".properties", ".yml", ".yaml"],
        ignores: &[
            "target/",
            "*.jar",
            "*.war",
            ".gradle/",
            "build/",
            "out/",
            ".idea/",
            "*.iml",
        ],
        triggers: &["pom.xml", "build.gradle", "application.properties"],
        package_match: &[],
    },
    Template {
        id: "android",
        name: "Android",
        extensions: &[".java", ".kt", ".xml"],
        ignores: &[
            "*.apk",
            "*.aab",
            "*.dex",
            "bin/",
            "gen/",
            ".gradle/",
            "build/",
            "local.properties",
            "captures/",
        ],
        triggers: &["AndroidManifest.xml", "gradlew"],
        package_match: &[],
    },
    Template {
        id: "django",
        name: "Django",
        extensions: &[],
        ignores: &[
            "*.log",
            "*.pyc",
            "__pycache__/",
            "db.sqlite3",
            "media/",
            "staticfiles/",
            "venv/",
            ".env",
        ],
        triggers: &["manage.py", "wsgi.py"],
        package_match: &[],
    },
    Template {
        id: "laravel",
        name: "Laravel",
        extensions: &[],
        ignores: &[
            "/vendor/",
            "node_modules/",
            ".env",
            ".env.local",
            "storage/",
            "bootstrap/cache/",
            "composer.lock",
            "package-lock.json",
        ],
        triggers: &["artisan", "composer.json"],
        package_match: &["laravel/framework"],
    },
    Template {
        id: "rails",
        name: "Ruby on Rails",
        extensions: &[".rb", ".erb"],
        ignores: &["log/", "tmp/", "storage/", ".bundle", "Gemfile.lock", "node_modules/"],
        triggers: &["config.ru", "Rakefile"],
        package_match: &[],
    },
    Template {
        id: "flutter",
        name: "Flutter",
        extensions: &[".dart"],
        ignores: &[".dart_tool/", ".flutter-plugins", "build/", ".packages"],
        triggers: &["pubspec.yaml", "*.dart"],
        package_match: &[],
    },
    Template {
        id: "godot4",
        name: "Godot 4",
        extensions: &[".gd", ".gdshader", ".tscn", ".tres"],
        ignores: &[
            ".godot/",
            ".mono/",
            "export/",
            "*.import",
            "*.generated",
            "user_data/",
            "*.log",
            ".cache/",
            "*.swp",
        ],
        triggers: &["project.godot", "*.tscn"],
        package_match: &[],
    },
    Template {
        id: "docker",
        name: "Docker",
        extensions: &[".dockerignore", ".yml", ".yaml"],
        ignores: &[],
        triggers: &["Dockerfile", "docker-compose.yml", "docker-compose.yaml"],
        package_match: &[],
    },
    Template {
        id: "prisma",
        name: "Prisma",
        extensions: &[".prisma"],
        ignores: &["migrations/"],
        triggers: &["schema.prisma"],
        package_match: &["prisma", "@prisma/client"],
    },
];
