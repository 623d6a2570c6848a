/// Default catalog compiled into the binary.
///
/// To add an app, copy one of the entries and fill in the fields:
/// `category` is one of the ids in [`super::tables::default_categories`],
/// `platform` one of [`super::tables::default_platforms`], and `designedFor`
/// either a list of people or `["Everyone"]`.
pub const BUILTIN_CATALOG_JSON: &str = r##"{
  "apps": [
    {
      "id": "transcript-cleaner",
      "name": "Transcript Cleaner",
      "description": "Clean Adobe Premiere transcript files by applying VA-specific capitalization rules. Preserves timestamps and speaker names while fixing terminology.",
      "icon": "📝",
      "iconBg": "from-blue-500 to-blue-600",
      "category": "Media",
      "platform": "VS Code/GitHub",
      "team": "Digital Media",
      "designedFor": ["Everyone"],
      "url": "https://dominiqueramirez.github.io/Transcript-Cleaner/",
      "dateAdded": "2025-11-19",
      "featured": true,
      "updates": [
        {
          "version": "1.1",
          "date": "2025-12-04",
          "notes": "Added acronym list and speaker label cleanup."
        }
      ]
    },
    {
      "id": "example-artifact-1",
      "name": "Quick Calculator",
      "description": "A simple calculator for quick math operations. Perfect for budget calculations and metrics.",
      "icon": "🧮",
      "iconBg": "from-green-500 to-emerald-600",
      "category": "Utilities",
      "platform": "Claude Artifact",
      "team": "Operations",
      "designedFor": ["Everyone"],
      "url": "#",
      "dateAdded": "2025-12-01",
      "featured": false
    },
    {
      "id": "example-artifact-2",
      "name": "Meeting Notes Formatter",
      "description": "Format and organize meeting notes with automatic headings, action items, and attendee lists.",
      "icon": "📋",
      "iconBg": "from-purple-500 to-purple-600",
      "category": "Productivity",
      "platform": "Claude Artifact",
      "team": "Operations",
      "designedFor": ["Julia", "Phil"],
      "url": "#",
      "dateAdded": "2025-12-03",
      "featured": false
    },
    {
      "id": "example-github-1",
      "name": "Data Visualizer",
      "description": "Upload CSV files and generate beautiful charts and graphs for presentations and reports.",
      "icon": "📊",
      "iconBg": "from-orange-500 to-red-500",
      "category": "Data",
      "platform": "VS Code/GitHub",
      "team": "Analytics",
      "designedFor": ["Analytics Team"],
      "url": "#",
      "dateAdded": "2025-11-25",
      "featured": true
    },
    {
      "id": "example-slack-1",
      "name": "Status Bot",
      "description": "Slack workflow for quick status updates and team check-ins.",
      "icon": "🤖",
      "iconBg": "from-pink-500 to-rose-500",
      "category": "Communication",
      "platform": "Slack",
      "team": "Digital Media",
      "designedFor": ["Everyone"],
      "url": "#",
      "dateAdded": "2025-11-20",
      "featured": false
    }
  ]
}"##;
